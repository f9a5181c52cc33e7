//! Turns raw Transfer logs into ledger records.
//!
//! Only logs carrying exactly three topics (`[signature, from, to]`) are considered;
//! anything else, such as ERC-721 transfers with an indexed token id or
//! non-indexed emissions, is dropped without a trace.
use alloy::primitives::{Address, U256};
use thiserror::Error;

use crate::model::{FailedLogRecord, TransferRecord};
use crate::source::log::RawLog;

const TRANSFER_TOPICS: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing transaction_hash")]
    MissingTransactionHash,
    #[error("missing block_number")]
    MissingBlockNumber,
    #[error("missing address")]
    MissingAddress,
    #[error("data is not a uint256: expected at least 32 bytes, got {0}")]
    InvalidAmount(usize),
    #[error("missing log_index")]
    MissingLogIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Valid(TransferRecord),
    Failed(FailedLogRecord),
}

/// Decoding outcome for a whole batch, in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedLogs {
    pub valid: Vec<TransferRecord>,
    pub failed: Vec<FailedLogRecord>,
}

/// Returns `None` when the log does not have the Transfer topic layout.
pub fn decode(log: &RawLog) -> Option<Decoded> {
    if log.topics.len() != TRANSFER_TOPICS {
        return None;
    }

    let decoded = match validate(log) {
        Ok(transfer) => Decoded::Valid(transfer),
        Err(e) => {
            Decoded::Failed(FailedLogRecord { raw_log: log.clone(), error_message: e.to_string() })
        }
    };
    Some(decoded)
}

pub fn decode_all<'a>(logs: impl IntoIterator<Item = &'a RawLog>) -> DecodedLogs {
    logs.into_iter().filter_map(decode).fold(DecodedLogs::default(), |mut acc, decoded| {
        match decoded {
            Decoded::Valid(transfer) => acc.valid.push(transfer),
            Decoded::Failed(failed) => {
                tracing::debug!("Failed log: {}", failed.error_message);
                acc.failed.push(failed)
            }
        }
        acc
    })
}

// Checks run in a fixed order and stop at the first failure.
fn validate(log: &RawLog) -> Result<TransferRecord, DecodeError> {
    let transaction_hash = log.transaction_hash.ok_or(DecodeError::MissingTransactionHash)?;
    let block_number = log.block_number.ok_or(DecodeError::MissingBlockNumber)?;
    let token_address = log.address.ok_or(DecodeError::MissingAddress)?;
    let amount = decode_amount(&log.data)?;
    let log_index = log.log_index.ok_or(DecodeError::MissingLogIndex)?;

    Ok(TransferRecord {
        transaction_hash,
        block_number,
        log_index,
        token_address,
        // topics are 32-byte words; an address is the low 20 bytes
        from_address: Address::from_word(log.topics[1]),
        to_address: Address::from_word(log.topics[2]),
        amount,
    })
}

// The amount is the first ABI word; trailing bytes are ignored.
fn decode_amount(data: &[u8]) -> Result<U256, DecodeError> {
    let word = data.first_chunk::<32>().ok_or(DecodeError::InvalidAmount(data.len()))?;
    Ok(U256::from_be_bytes(*word))
}
