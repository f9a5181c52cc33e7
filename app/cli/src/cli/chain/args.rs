use clap::Parser;
use engine::args::DEFAULT_LOOKBACK;

#[derive(Parser, Debug)]
#[command(about = "Query the node", long_about = None)]
pub struct RpcArgs {
    /// Node Provider connection string
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
#[command(about = "Locate the start of the lookback window", long_about = None)]
pub struct FirstBlockArgs {
    /// Node Provider connection string
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Lookback window in seconds
    #[arg(long, env = "LOOKBACK_SECS", default_value_t = DEFAULT_LOOKBACK.as_secs())]
    pub lookback_secs: u64,
}
