use alloy::primitives::BlockNumber;
use eyre::{Result, eyre};
use std::cmp::Ordering;
use std::time::Duration;

use crate::source::handle::Source;

/// Binary search over `[0, current_height]` for the block whose timestamp matches
/// `target_timestamp`.
///
/// An exact match returns immediately. Otherwise the search narrows until the window
/// is empty and the block examined last is returned, which may sit on either side
/// of the target. Relies on block timestamps being non-decreasing.
pub async fn locate_block(
    source: &dyn Source,
    current_height: BlockNumber,
    target_timestamp: u64,
) -> Result<BlockNumber> {
    let mut left: BlockNumber = 0;
    let mut right: BlockNumber = current_height;
    let mut examined: Option<BlockNumber> = None;

    while left <= right {
        let mid = left + (right - left) / 2;
        let block = source.block_by_number(mid).await?;
        examined = Some(block.number);

        match block.timestamp.cmp(&target_timestamp) {
            Ordering::Equal => return Ok(block.number),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => right = next,
                None => break,
            },
        }
    }

    examined.ok_or_else(|| eyre!("No block examined while locating timestamp {target_timestamp}"))
}

/// Earliest block inside the `lookback` window ending at the current chain head.
/// The window is measured in chain time: head timestamp minus `lookback`.
pub async fn lookback_start_block(source: &dyn Source, lookback: Duration) -> Result<BlockNumber> {
    let current_height = source.current_height().await?;
    let head = source.block_by_number(current_height).await?;
    let target_timestamp = head.timestamp.saturating_sub(lookback.as_secs());

    tracing::info!(
        "Locating lookback start: head={current_height} target_timestamp={target_timestamp}"
    );

    let block_number = locate_block(source, current_height, target_timestamp).await?;

    tracing::info!("Lookback start block: {block_number}");
    Ok(block_number)
}
