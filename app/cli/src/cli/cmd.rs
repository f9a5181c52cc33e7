use clap::command;
use clap::{Parser, Subcommand};

use crate::cli::balance::args::BalanceArgs;
use crate::cli::chain::args::{FirstBlockArgs, RpcArgs};
use crate::cli::query::args::Query;
use crate::cli::sync::args::SyncArgs;

#[derive(Parser, Debug)]
#[command(name = "erc20-indexer")]
#[command(about = "Index ERC-20 transfers into a local ledger and derive wallet balances", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Index transfers up to the current chain head
    Sync(SyncArgs),
    /// Print the current chain height
    LatestBlock(RpcArgs),
    /// Print the block a fresh ledger would start indexing from
    FirstBlock(FirstBlockArgs),
    /// Print a wallet's token balances computed from the ledger
    Balance(BalanceArgs),
    /// Print indexed rows
    Select(Query),
}
