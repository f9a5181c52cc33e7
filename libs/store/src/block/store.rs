use crate::client::Client;
use sqlx::{Error, SqliteConnection};

/// Watermark rows: one per block number holding at least one persisted transfer.
#[derive(Clone)]
pub struct Store {
    client: Client,
}

pub(crate) async fn upsert(conn: &mut SqliteConnection, number: i64) -> Result<u64, Error> {
    let query = r#"
        INSERT OR IGNORE INTO blocks (number)
        VALUES (?)
        "#;
    let result = sqlx::query(query).bind(number).execute(conn).await?;
    Ok(result.rows_affected())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_block_numbers(&self) -> Result<Vec<i64>, Error> {
        sqlx::query_scalar("SELECT number FROM blocks ORDER BY number ASC")
            .fetch_all(self.client.pool())
            .await
    }
}
