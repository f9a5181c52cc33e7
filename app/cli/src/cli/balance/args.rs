use alloy::primitives::Address;
use clap::Parser;

use crate::cli::read::parse_address;

#[derive(Parser, Debug)]
#[command(about = "Compute a wallet's balances from the ledger", long_about = None)]
pub struct BalanceArgs {
    /// SQLite connection string
    #[arg(short, long, env = "DATABASE_URL")]
    pub db_url: String,

    /// Wallet address
    #[arg(short, long, value_parser = parse_address)]
    pub wallet: Address,
}
