mod cli {
    pub mod balance {
        pub mod args;
        pub mod run;
    }
    pub mod chain {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod read;
        pub mod response;
        pub mod run;
    }
    pub mod sync {
        pub mod args;
        pub mod run;
    }
    pub mod cmd;
    pub mod read;
}

use clap::Parser;
use engine::args::Args;
use eyre::Result;
use std::time::Duration;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Sync(args) => {
            tracing::info!("Sync Command: {:?}", args);
            // map CLI args to Engine Args
            let sync_args = Args {
                from_block: args.from_block,
                lookback: Duration::from_secs(args.lookback_secs),
                batch_size: args.batch_size,
                metadata_fan_out: args.metadata_fan_out,
                ..Default::default()
            };
            sync_args.validate()?;
            let every = args.every.map(Duration::from_secs);
            cli::sync::run::start(&args.rpc_url, &args.db_url, sync_args, every).await
        }
        Command::LatestBlock(args) => cli::chain::run::latest_block(&args.rpc_url).await,
        Command::FirstBlock(args) => {
            cli::chain::run::first_block(&args.rpc_url, Duration::from_secs(args.lookback_secs))
                .await
        }
        Command::Balance(args) => cli::balance::run::balance(args).await,
        Command::Select(query) => {
            tracing::info!("Select Query: {:?}", query);
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Sync(_) => {
            // install global subscriber configured based on RUST_LOG envvar.
            tracing_subscriber::fmt::init();
        }
        _ => {
            // stdout carries the command's JSON output
            tracing_subscriber::fmt::Subscriber::builder()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
