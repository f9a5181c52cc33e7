use engine::{balance, ledger::sqlite::SqliteLedger};
use eyre::Result;
use store::client::Client;

use crate::cli::balance::args::BalanceArgs;

pub async fn balance(args: &BalanceArgs) -> Result<()> {
    let ledger = SqliteLedger::new(Client::init(&args.db_url).await?);

    let balances = balance::wallet_balances(&ledger, args.wallet).await?;

    println!("{}", serde_json::to_string_pretty(&balances)?);
    Ok(())
}
