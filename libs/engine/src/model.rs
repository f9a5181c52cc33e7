use alloy::primitives::{Address, BlockNumber, TxHash, U256};

use crate::source::log::RawLog;

/// A validated ERC-20 Transfer. Identified in the ledger by `(transaction_hash, log_index)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub transaction_hash: TxHash,
    pub block_number: BlockNumber,
    pub log_index: u64,
    pub token_address: Address,
    pub from_address: Address,
    pub to_address: Address,
    pub amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLogRecord {
    pub raw_log: RawLog,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub token_address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
