use alloy::primitives::{Address, BlockNumber};
use eyre::Result;
use std::collections::HashSet;

use crate::model::{FailedLogRecord, TokenMetadata, TransferRecord};

/// One processed block window, ready to be made durable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBatch {
    /// Last block of the window; becomes the checkpoint once committed.
    pub to_block: BlockNumber,
    pub transfers: Vec<TransferRecord>,
    pub failed: Vec<FailedLogRecord>,
    pub tokens: Vec<TokenMetadata>,
}

/// Rows actually written by a commit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommitStats {
    pub transfers: u64,
    pub failed: u64,
    pub tokens: u64,
}

/// Durable transfer ledger. Writes must be idempotent: committing the same batch
/// twice leaves the stored rows unchanged.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    async fn checkpoint(&self) -> Result<Option<BlockNumber>>;

    /// Persists the batch and advances the checkpoint to `batch.to_block`, atomically.
    async fn commit(&self, batch: &PendingBatch) -> Result<CommitStats>;

    async fn token_addresses(&self) -> Result<HashSet<Address>>;

    async fn token(&self, token_address: Address) -> Result<Option<TokenMetadata>>;

    async fn transfers_by_recipient(&self, wallet: Address) -> Result<Vec<TransferRecord>>;

    async fn transfers_by_sender(&self, wallet: Address) -> Result<Vec<TransferRecord>>;
}
