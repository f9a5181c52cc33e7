use crate::client::Client;
use crate::transfer::model::Transfer;
use alloy::primitives::BlockNumber;
use sqlx::{Error, QueryBuilder, Sqlite, SqliteConnection};

// 7 binds per row keeps a chunk well under SQLite's bound-parameter limit.
const INSERT_CHUNK_SIZE: usize = 100;

const SELECT_COLUMNS: &str = r#"
    SELECT
        block_number, transaction_hash, log_index,
        token_address, from_address, to_address, amount
    FROM transfers
    "#;

pub struct Store {
    client: Client,
}

/// Inserts every transfer not already present under `(transaction_hash, log_index)`.
/// Returns the number of rows actually written.
pub(crate) async fn insert_batch(
    conn: &mut SqliteConnection,
    transfers: &[Transfer],
) -> Result<u64, Error> {
    let mut inserted = 0;

    for chunk in transfers.chunks(INSERT_CHUNK_SIZE) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT OR IGNORE INTO transfers (
                block_number, transaction_hash, log_index,
                token_address, from_address, to_address, amount
            ) ",
        );
        builder.push_values(chunk, |mut row, transfer| {
            row.push_bind(transfer.block_number)
                .push_bind(transfer.transaction_hash.as_slice())
                .push_bind(transfer.log_index)
                .push_bind(transfer.token_address.as_slice())
                .push_bind(transfer.from_address.as_slice())
                .push_bind(transfer.to_address.as_slice())
                .push_bind(transfer.amount.as_str());
        });

        inserted += builder.build().execute(&mut *conn).await?.rows_affected();
    }

    Ok(inserted)
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // TRANSFER LOGS
    // ---------------------------

    pub async fn insert_transfers_batch(&self, transfers: &[Transfer]) -> Result<u64, Error> {
        let mut conn = self.client.pool().acquire().await?;
        insert_batch(&mut conn, transfers).await
    }

    pub async fn get_transfers_by_recipient(&self, wallet: &[u8]) -> Result<Vec<Transfer>, Error> {
        let query = format!("{SELECT_COLUMNS} WHERE to_address = ? ORDER BY block_number, log_index");
        sqlx::query_as(&query).bind(wallet).fetch_all(self.client.pool()).await
    }

    pub async fn get_transfers_by_sender(&self, wallet: &[u8]) -> Result<Vec<Transfer>, Error> {
        let query =
            format!("{SELECT_COLUMNS} WHERE from_address = ? ORDER BY block_number, log_index");
        sqlx::query_as(&query).bind(wallet).fetch_all(self.client.pool()).await
    }

    pub async fn get_transfers_from_block_number(
        &self,
        from_block_number: BlockNumber,
    ) -> Result<Vec<Transfer>, Error> {
        let query =
            format!("{SELECT_COLUMNS} WHERE block_number >= ? ORDER BY block_number, log_index");
        sqlx::query_as(&query)
            .bind(from_block_number as i64)
            .fetch_all(self.client.pool())
            .await
    }

    pub async fn get_transfers_between_block_numbers(
        &self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Transfer>, Error> {
        let query = format!(
            "{SELECT_COLUMNS} WHERE block_number BETWEEN ? AND ? ORDER BY block_number, log_index"
        );
        sqlx::query_as(&query)
            .bind(from_block as i64)
            .bind(to_block as i64)
            .fetch_all(self.client.pool())
            .await
    }

    pub async fn count_transfers(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM transfers").fetch_one(self.client.pool()).await
    }
}
