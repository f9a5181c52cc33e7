use alloy::primitives::{Address, BlockNumber};
use eyre::Result;

use crate::model::TokenMetadata;
use crate::source::filter::ChunkFilter;
use crate::source::log::RawLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStamp {
    pub number: BlockNumber,
    pub timestamp: u64,
}

/// Chain data consumed by the indexer. Every error is treated as transient by
/// callers: it aborts the current operation and nothing retries it.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn current_height(&self) -> Result<BlockNumber>;

    async fn block_by_number(&self, number: BlockNumber) -> Result<BlockStamp>;

    async fn logs_in_range(&self, filter: ChunkFilter) -> Result<Vec<RawLog>>;

    async fn token_metadata(&self, token_address: Address) -> Result<TokenMetadata>;
}
