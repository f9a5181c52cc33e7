use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, B256, BlockNumber};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::{Block, Filter, Log};
use alloy::transports::RpcError;
use alloy::transports::TransportErrorKind;
use alloy::transports::http::reqwest::Url;
use eyre::{Result, WrapErr};

use crate::erc20::{Erc20Metadata, IERC20Metadata};

/// Read-only JSON-RPC client. Indexing never signs, so no wallet filler is attached.
#[derive(Clone)]
pub struct NodeClient {
    provider: RootProvider,
}

impl NodeClient {
    pub fn new(rpc_url: Url) -> Self {
        let provider = RootProvider::new_http(rpc_url);
        Self { provider }
    }

    pub async fn get_latest_block_number(&self) -> Result<u64, RpcError<TransportErrorKind>> {
        self.provider.get_block_number().await
    }

    pub async fn get_block_by_number(
        &self,
        block_number: BlockNumber,
    ) -> Result<Option<Block>, RpcError<TransportErrorKind>> {
        self.provider.get_block_by_number(BlockNumberOrTag::Number(block_number)).await
    }

    /// Logs whose topic0 is `event_signature`, emitted by any contract in the inclusive
    /// range `[from_block, to_block]`.
    pub async fn get_logs(
        &self,
        event_signature: B256,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError<TransportErrorKind>> {
        let filter = Filter::new()
            .event_signature(event_signature)
            .from_block(from_block)
            .to_block(to_block);

        self.provider.get_logs(&filter).await
    }

    pub async fn get_token_metadata(&self, token_address: Address) -> Result<Erc20Metadata> {
        let token = IERC20Metadata::new(token_address, self.provider.clone());

        let name = token.name().call().await.wrap_err("name() call failed")?;
        let symbol = token.symbol().call().await.wrap_err("symbol() call failed")?;
        let decimals = token.decimals().call().await.wrap_err("decimals() call failed")?;

        Ok(Erc20Metadata { name, symbol, decimals })
    }
}
