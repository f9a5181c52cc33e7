use crate::model::TokenMetadata;
use crate::source::filter::ChunkFilter;
use crate::source::handle::{BlockStamp, Source};
use alloy::primitives::{Address, B256, BlockNumber, Bytes, TxHash};
use alloy::rpc::types::Log;
use chain::rpc::NodeClient;
use eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};

/// An event log as handed over by the node, before any validation.
/// Fields the node may omit stay optional so that malformed logs can still be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: Option<Address>,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub transaction_hash: Option<TxHash>,
    pub block_number: Option<BlockNumber>,
    pub log_index: Option<u64>,
}

impl From<Log> for RawLog {
    fn from(log: Log) -> Self {
        Self {
            address: Some(log.address()),
            topics: log.topics().to_vec(),
            data: log.data().data.clone(),
            transaction_hash: log.transaction_hash,
            block_number: log.block_number,
            log_index: log.log_index,
        }
    }
}

pub struct LogSource {
    pub node_client: NodeClient,
}

#[async_trait::async_trait]
impl Source for LogSource {
    async fn current_height(&self) -> Result<BlockNumber> {
        self.node_client.get_latest_block_number().await.wrap_err("eth_blockNumber failed")
    }

    async fn block_by_number(&self, number: BlockNumber) -> Result<BlockStamp> {
        let block = self
            .node_client
            .get_block_by_number(number)
            .await
            .wrap_err_with(|| format!("eth_getBlockByNumber failed for block {number}"))?
            .ok_or_else(|| eyre!("Block not found: {number}"))?;

        Ok(BlockStamp { number: block.header.number, timestamp: block.header.timestamp })
    }

    async fn logs_in_range(&self, filter: ChunkFilter) -> Result<Vec<RawLog>> {
        let logs = self
            .node_client
            .get_logs(
                filter.event.topic(),
                filter.from_block_number.into(),
                filter.to_block_number.into(),
            )
            .await
            .wrap_err_with(|| {
                format!(
                    "eth_getLogs failed for blocks [{}, {}]",
                    filter.from_block_number, filter.to_block_number
                )
            })?;

        Ok(logs.into_iter().map(RawLog::from).collect())
    }

    async fn token_metadata(&self, token_address: Address) -> Result<TokenMetadata> {
        let metadata = self.node_client.get_token_metadata(token_address).await?;

        Ok(TokenMetadata {
            token_address,
            name: metadata.name,
            symbol: metadata.symbol,
            decimals: metadata.decimals,
        })
    }
}
