use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use engine::locator;
use engine::source::{handle::Source, log::LogSource};
use eyre::Result;
use std::time::Duration;

fn source(rpc_url: &str) -> Result<LogSource> {
    Ok(LogSource { node_client: NodeClient::new(Url::parse(rpc_url)?) })
}

pub async fn latest_block(rpc_url: &str) -> Result<()> {
    let latest_block = source(rpc_url)?.current_height().await?;
    println!("{latest_block}");
    Ok(())
}

pub async fn first_block(rpc_url: &str, lookback: Duration) -> Result<()> {
    let first_block = locator::lookback_start_block(&source(rpc_url)?, lookback).await?;
    println!("{first_block}");
    Ok(())
}
