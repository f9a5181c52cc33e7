use crate::client::Client;
use crate::token::model::Token;
use sqlx::{Error, SqliteConnection};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

/// Insert-if-absent: metadata already known for an address is never overwritten.
pub(crate) async fn insert_batch(conn: &mut SqliteConnection, tokens: &[Token]) -> Result<u64, Error> {
    let query = r#"
        INSERT OR IGNORE INTO tokens (token_address, name, symbol, decimals)
        VALUES (?, ?, ?, ?)
        "#;

    let mut inserted = 0;
    for token in tokens {
        inserted += sqlx::query(query)
            .bind(&token.token_address)
            .bind(&token.name)
            .bind(&token.symbol)
            .bind(token.decimals)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }
    Ok(inserted)
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn insert_tokens_batch(&self, tokens: &[Token]) -> Result<u64, Error> {
        let mut conn = self.client.pool().acquire().await?;
        insert_batch(&mut conn, tokens).await
    }

    pub async fn get_token(&self, token_address: &[u8]) -> Result<Option<Token>, Error> {
        let query = r#"
            SELECT token_address, name, symbol, decimals
            FROM tokens
            WHERE token_address = ?
            LIMIT 1
            "#;
        sqlx::query_as(query).bind(token_address).fetch_optional(self.client.pool()).await
    }

    pub async fn get_tokens(&self) -> Result<Vec<Token>, Error> {
        let query = r#"
            SELECT token_address, name, symbol, decimals
            FROM tokens
            ORDER BY token_address ASC
            "#;
        sqlx::query_as(query).fetch_all(self.client.pool()).await
    }

    pub async fn get_token_addresses(&self) -> Result<Vec<Vec<u8>>, Error> {
        sqlx::query_scalar("SELECT token_address FROM tokens").fetch_all(self.client.pool()).await
    }
}
