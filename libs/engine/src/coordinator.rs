use crate::args::Args;
use crate::ledger::handle::{Ledger, PendingBatch};
use crate::locator;
use crate::processor;
use crate::resolver;
use crate::source::filter::ChunkFilter;
use crate::source::handle::Source;
use alloy::primitives::BlockNumber;
use eyre::{Result, WrapErr};

/// Summary of one completed sync run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub start_block: BlockNumber,
    /// Chain head observed when the run started; the run never goes past it.
    pub latest_block: BlockNumber,
    pub batches: u64,
    pub transfers: u64,
    pub failed_logs: u64,
    pub tokens: u64,
}

/// Drives one resumable sync run: windows are fetched, processed and committed strictly
/// one after another, and the checkpoint only moves once a window is durable.
pub struct Coordinator<'a> {
    source: &'a dyn Source,
    ledger: &'a dyn Ledger,
}

impl<'a> Coordinator<'a> {
    pub fn new(source: &'a dyn Source, ledger: &'a dyn Ledger) -> Self {
        Self { source, ledger }
    }

    /// First block this run has to process.
    pub async fn start_block(&self, args: &Args) -> Result<BlockNumber> {
        if let Some(from_block) = args.from_block {
            return Ok(from_block);
        }

        match self.ledger.checkpoint().await? {
            Some(checkpoint) if checkpoint > 0 => Ok(checkpoint + 1),
            // never synced
            _ => locator::lookback_start_block(self.source, args.lookback).await,
        }
    }

    pub async fn run(&self, args: &Args) -> Result<SyncReport> {
        args.validate()?;

        let start_block = self.start_block(args).await?;
        let latest_block = self.source.current_height().await?;

        let mut report = SyncReport { start_block, latest_block, ..Default::default() };

        // Includes addresses whose lookup failed earlier in this run: those are not retried.
        let mut seen_tokens = self.ledger.token_addresses().await?;

        tracing::info!("Sync started at block number: {start_block} (head: {latest_block})");

        let mut cursor = start_block;
        while cursor <= latest_block {
            let to_block = cursor.saturating_add(args.batch_size - 1).min(latest_block);

            let filter = ChunkFilter {
                event: args.event,
                from_block_number: cursor,
                to_block_number: to_block,
            };
            let raw_logs = match self.source.logs_in_range(filter).await {
                Ok(raw_logs) => raw_logs,
                Err(e) => {
                    tracing::error!("Sync failed on [logs_in_range] for [{cursor}, {to_block}]: {e:?}");
                    return Err(e);
                }
            };

            let outcome = processor::process_batch(&raw_logs, &seen_tokens);

            let tokens = resolver::resolve_tokens(
                self.source,
                &outcome.tokens_to_fetch,
                args.metadata_fan_out,
            )
            .await;
            seen_tokens.extend(outcome.tokens_to_fetch.iter().copied());

            let batch = PendingBatch {
                to_block,
                transfers: outcome.valid,
                failed: outcome.failed,
                tokens: tokens.resolved,
            };

            let stats = self
                .ledger
                .commit(&batch)
                .await
                .wrap_err_with(|| format!("Sync aborted at [{cursor}, {to_block}]"))?;

            tracing::info!(
                "Processed blocks {cursor} to {to_block}: {} logs, {} transfers, {} failed, {} tokens",
                raw_logs.len(),
                stats.transfers,
                stats.failed,
                stats.tokens
            );

            report.batches += 1;
            report.transfers += stats.transfers;
            report.failed_logs += stats.failed;
            report.tokens += stats.tokens;

            cursor = to_block + 1;
        }

        tracing::info!("Sync finished at block number: {latest_block}");

        Ok(report)
    }
}
