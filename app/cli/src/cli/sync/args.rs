use clap::Parser;
use engine::args::{DEFAULT_BATCH_SIZE, DEFAULT_LOOKBACK, DEFAULT_METADATA_FAN_OUT};

#[derive(Parser, Debug)]
#[command(about = "Index ERC-20 transfers into the ledger", long_about = None)]
pub struct SyncArgs {
    /// Node Provider connection string
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// SQLite connection string
    #[arg(short, long, env = "DATABASE_URL")]
    pub db_url: String,

    /// Start at this block instead of the checkpoint / lookback window
    #[arg(long)]
    pub from_block: Option<u64>,

    /// Lookback window in seconds used when the ledger has never been synced
    #[arg(long, env = "LOOKBACK_SECS", default_value_t = DEFAULT_LOOKBACK.as_secs())]
    pub lookback_secs: u64,

    /// Blocks per window
    #[arg(long, env = "BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: u64,

    /// Concurrent token metadata lookups
    #[arg(long, env = "METADATA_FAN_OUT", default_value_t = DEFAULT_METADATA_FAN_OUT)]
    pub metadata_fan_out: usize,

    /// Repeat the sync every N seconds until Ctrl-C
    #[arg(long)]
    pub every: Option<u64>,
}
