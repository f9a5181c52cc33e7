use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use engine::{
    args::Args, coordinator::Coordinator, ledger::sqlite::SqliteLedger, source::log::LogSource,
};
use eyre::Result;
use std::time::Duration;
use store::client::Client;
use tokio::time::MissedTickBehavior;

pub async fn start(
    rpc_url: &str,
    db_url: &str,
    mut sync_args: Args,
    every: Option<Duration>,
) -> Result<()> {
    let source = LogSource { node_client: NodeClient::new(Url::parse(rpc_url)?) };
    let ledger = SqliteLedger::new(Client::init(db_url).await?);
    let coordinator = Coordinator::new(&source, &ledger);

    let Some(period) = every else {
        let report = coordinator.run(&sync_args).await?;
        tracing::info!("Sync completed: {report:?}");
        return Ok(());
    };

    tracing::info!("Syncing every {period:?}, press Ctrl-C to stop");

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let report = coordinator.run(&sync_args).await?;
                tracing::info!("Sync completed: {report:?}");
                // later runs resume from the checkpoint
                sync_args.from_block = None;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                break;
            }
        }
    }

    Ok(())
}
