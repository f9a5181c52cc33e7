use crate::cli::query::args::Query;
use crate::cli::query::read::{Entity, FromBlock};
use crate::cli::query::response::{
    CheckpointResponse, FailedLogResponse, TokenResponse, TransferResponse,
};
use eyre::{Result, eyre};
use store::client::Client;

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::init(&query.db_url).await?;

    let checkpoint_store = store::checkpoint::store::Store::new(client.clone());

    match query.entity {
        Entity::Transfer => {
            let transfer_store = store::transfer::store::Store::new(client.clone());

            let block_number = match query.from_block {
                FromBlock::Number(block_number) => block_number,
                FromBlock::Last => match checkpoint_store.get_last_checkpoint().await? {
                    None => return Err(eyre!("Last Checkpoint Not Found")),
                    Some(checkpoint) => checkpoint.block_number as u64,
                },
            };

            let transfers = match query.to_block {
                Some(to_block) => {
                    transfer_store.get_transfers_between_block_numbers(block_number, to_block).await?
                }
                None => transfer_store.get_transfers_from_block_number(block_number).await?,
            };

            if transfers.is_empty() {
                println!("No Transfers Found")
            } else {
                let response: Vec<TransferResponse> =
                    transfers.into_iter().map(TransferResponse).collect();
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Entity::Checkpoint => {
            let checkpoint = match query.from_block {
                FromBlock::Number(block_number) => {
                    checkpoint_store.get_checkpoint_by_number(block_number).await?
                }
                FromBlock::Last => checkpoint_store.get_last_checkpoint().await?,
            }
            .ok_or(eyre!("Checkpoint Not Found"))?;

            let response = CheckpointResponse(checkpoint);

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Entity::Failed => {
            let failed_store = store::failed::store::Store::new(client.clone());

            let failed_logs = failed_store.get_failed_logs().await?;

            if failed_logs.is_empty() {
                println!("No Failed Logs Found")
            } else {
                let response: Vec<FailedLogResponse> =
                    failed_logs.into_iter().map(FailedLogResponse).collect();
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Entity::Token => {
            let token_store = store::token::store::Store::new(client.clone());

            let tokens = token_store.get_tokens().await?;

            if tokens.is_empty() {
                println!("No Tokens Found")
            } else {
                let response: Vec<TokenResponse> = tokens.into_iter().map(TokenResponse).collect();
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}
