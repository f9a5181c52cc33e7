use alloy::primitives::BlockNumber;
use eyre::{Result, eyre};
use std::time::Duration;

use crate::source::filter::EventType;

/// 90 days.
pub const DEFAULT_LOOKBACK: Duration = Duration::from_secs(7_776_000);
pub const DEFAULT_BATCH_SIZE: u64 = 100;
pub const DEFAULT_METADATA_FAN_OUT: usize = 5;

#[derive(Debug, Clone)]
pub struct Args {
    pub event: EventType,
    /// Forces the first block of the run, ignoring checkpoint and lookback.
    pub from_block: Option<BlockNumber>,
    pub lookback: Duration,
    pub batch_size: u64,
    pub metadata_fan_out: usize,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            event: EventType::Transfer,
            from_block: None,
            lookback: DEFAULT_LOOKBACK,
            batch_size: DEFAULT_BATCH_SIZE,
            metadata_fan_out: DEFAULT_METADATA_FAN_OUT,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(eyre!("batch_size must be at least 1"));
        }
        if self.metadata_fan_out == 0 {
            return Err(eyre!("metadata_fan_out must be at least 1"));
        }
        Ok(())
    }
}
