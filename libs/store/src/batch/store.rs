use crate::batch::model::{Batch, Committed};
use crate::client::Client;
use crate::{block, checkpoint, failed, token, transfer};
use sqlx::Error;
use std::collections::BTreeSet;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Persists a batch and advances the checkpoint in a single transaction.
    /// On any error nothing is written, so the window is replayed on the next run.
    pub async fn commit(&self, batch: &Batch) -> Result<Committed, Error> {
        let mut tx = self.client.pool().begin().await?;
        let mut committed = Committed::default();

        let block_numbers: BTreeSet<i64> =
            batch.transfers.iter().map(|transfer| transfer.block_number).collect();
        for number in block_numbers {
            committed.blocks += block::store::upsert(&mut tx, number).await?;
        }

        committed.transfers = transfer::store::insert_batch(&mut tx, &batch.transfers).await?;

        for failed_log in &batch.failed_logs {
            committed.failed_logs += failed::store::insert(&mut tx, failed_log).await?;
        }

        committed.tokens = token::store::insert_batch(&mut tx, &batch.tokens).await?;

        // Last write of the transaction: the checkpoint only covers rows above.
        checkpoint::store::insert(&mut tx, &batch.checkpoint).await?;

        tx.commit().await?;

        Ok(committed)
    }
}
