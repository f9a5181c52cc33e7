use alloy::primitives::{Address, BlockNumber};
use eyre::{Result, eyre};
use std::collections::HashSet;
use store::batch::model::Batch;
use store::batch::store::Store as BatchStore;
use store::checkpoint::model::Checkpoint;
use store::checkpoint::store::Store as CheckpointStore;
use store::client::Client;
use store::failed::model::FailedLog;
use store::token::model::Token;
use store::token::store::Store as TokenStore;
use store::transfer::model::Transfer;
use store::transfer::store::Store as TransferStore;

use crate::adapter;
use crate::ledger::handle::{CommitStats, Ledger, PendingBatch};
use crate::model::{TokenMetadata, TransferRecord};

pub struct SqliteLedger {
    batch_store: BatchStore,
    checkpoint_store: CheckpointStore,
    token_store: TokenStore,
    transfer_store: TransferStore,
}

impl SqliteLedger {
    pub fn new(client: Client) -> Self {
        Self {
            batch_store: BatchStore::new(client.clone()),
            checkpoint_store: CheckpointStore::new(client.clone()),
            token_store: TokenStore::new(client.clone()),
            transfer_store: TransferStore::new(client),
        }
    }
}

fn to_records(rows: &[Transfer]) -> Result<Vec<TransferRecord>> {
    rows.iter().map(TransferRecord::try_from).collect()
}

#[async_trait::async_trait]
impl Ledger for SqliteLedger {
    async fn checkpoint(&self) -> Result<Option<BlockNumber>> {
        match self.checkpoint_store.get_last_checkpoint().await? {
            Some(checkpoint) => Ok(Some(u64::try_from(checkpoint.block_number)?)),
            None => Ok(None),
        }
    }

    async fn commit(&self, batch: &PendingBatch) -> Result<CommitStats> {
        let rows = Batch {
            checkpoint: Checkpoint { block_number: batch.to_block as i64 },
            transfers: batch.transfers.iter().map(Transfer::from).collect(),
            failed_logs: batch.failed.iter().map(FailedLog::try_from).collect::<Result<_>>()?,
            tokens: batch.tokens.iter().map(Token::from).collect(),
        };

        match self.batch_store.commit(&rows).await {
            Ok(committed) => Ok(CommitStats {
                transfers: committed.transfers,
                failed: committed.failed_logs,
                tokens: committed.tokens,
            }),
            Err(e) => {
                tracing::error!("Ledger failed on [commit] up to block {}: {e:?}", batch.to_block);
                Err(eyre!(e))
            }
        }
    }

    async fn token_addresses(&self) -> Result<HashSet<Address>> {
        self.token_store
            .get_token_addresses()
            .await?
            .iter()
            .map(|bytes| adapter::address(bytes, "token_address"))
            .collect()
    }

    async fn token(&self, token_address: Address) -> Result<Option<TokenMetadata>> {
        let token = self.token_store.get_token(token_address.as_slice()).await?;
        token.as_ref().map(TokenMetadata::try_from).transpose()
    }

    async fn transfers_by_recipient(&self, wallet: Address) -> Result<Vec<TransferRecord>> {
        to_records(&self.transfer_store.get_transfers_by_recipient(wallet.as_slice()).await?)
    }

    async fn transfers_by_sender(&self, wallet: Address) -> Result<Vec<TransferRecord>> {
        to_records(&self.transfer_store.get_transfers_by_sender(wallet.as_slice()).await?)
    }
}
