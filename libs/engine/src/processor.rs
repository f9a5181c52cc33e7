use alloy::primitives::Address;
use std::collections::{BTreeSet, HashSet};

use crate::decoder::{self, DecodedLogs};
use crate::model::{FailedLogRecord, TransferRecord};
use crate::source::log::RawLog;

/// What a block window contributes to the ledger, before any I/O.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub valid: Vec<TransferRecord>,
    pub failed: Vec<FailedLogRecord>,
    /// Distinct token addresses seen in `valid` that are not in `known_tokens`, sorted.
    pub tokens_to_fetch: Vec<Address>,
}

/// Pure step of the sync loop: decode the window's logs and work out which token
/// contracts still need metadata.
pub fn process_batch(raw_logs: &[RawLog], known_tokens: &HashSet<Address>) -> BatchOutcome {
    let DecodedLogs { valid, failed } = decoder::decode_all(raw_logs);

    let tokens_to_fetch: BTreeSet<Address> = valid
        .iter()
        .map(|transfer| transfer.token_address)
        .filter(|token_address| !known_tokens.contains(token_address))
        .collect();

    BatchOutcome { valid, failed, tokens_to_fetch: tokens_to_fetch.into_iter().collect() }
}
