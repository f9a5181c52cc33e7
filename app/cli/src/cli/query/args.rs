use clap::Parser;

use crate::cli::query::read::{Entity, FromBlock};

#[derive(Parser, Debug)]
#[command(about = "Select indexed results", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long, env = "DATABASE_URL")]
    pub db_url: String,

    /// Entity to query
    #[arg(short, long, value_enum)]
    pub entity: Entity,

    /// First block to select (a number or `last` for the latest checkpoint)
    #[arg(long, default_value = "0")]
    pub from_block: FromBlock,

    /// Last block to select, transfers only
    #[arg(long)]
    pub to_block: Option<u64>,
}
