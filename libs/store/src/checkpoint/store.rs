use crate::checkpoint::model::Checkpoint;
use crate::client::Client;
use alloy::primitives::BlockNumber;
use sqlx::{Error, SqliteConnection};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

pub(crate) async fn insert(conn: &mut SqliteConnection, checkpoint: &Checkpoint) -> Result<(), Error> {
    let query = r#"
        INSERT OR IGNORE INTO checkpoints (block_number)
        VALUES (?)
        "#;
    sqlx::query(query).bind(checkpoint.block_number).execute(conn).await?;
    Ok(())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // CHECKPOINTS
    // ---------------------------

    pub async fn insert_checkpoint(&self, checkpoint: &Checkpoint) -> Result<(), Error> {
        let mut conn = self.client.pool().acquire().await?;
        insert(&mut conn, checkpoint).await
    }

    /// Highest checkpoint ever recorded. Ordering by block number (not insertion)
    /// keeps the reported checkpoint from moving backwards.
    pub async fn get_last_checkpoint(&self) -> Result<Option<Checkpoint>, Error> {
        let query = r#"
            SELECT block_number
            FROM checkpoints
            ORDER BY block_number DESC
            LIMIT 1
            "#;
        let checkpoint = sqlx::query_as(query).fetch_optional(self.client.pool()).await?;

        Ok(checkpoint)
    }

    pub async fn get_checkpoint_by_number(
        &self,
        block_number: BlockNumber,
    ) -> Result<Option<Checkpoint>, Error> {
        let query = r#"
            SELECT block_number
            FROM checkpoints
            WHERE block_number = ?
            LIMIT 1
            "#;
        let checkpoint = sqlx::query_as(query)
            .bind(block_number as i64)
            .fetch_optional(self.client.pool())
            .await?;

        Ok(checkpoint)
    }
}
