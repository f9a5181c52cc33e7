use alloy::primitives::{Address, TxHash, U256};
use eyre::{Result, eyre};
use store::{failed::model::FailedLog, token::model::Token, transfer::model::Transfer};

use crate::model::{FailedLogRecord, TokenMetadata, TransferRecord};

impl From<&TransferRecord> for Transfer {
    fn from(record: &TransferRecord) -> Self {
        Self {
            block_number: record.block_number as i64,
            transaction_hash: record.transaction_hash.to_vec(),
            log_index: record.log_index as i64,
            token_address: record.token_address.to_vec(),
            from_address: record.from_address.to_vec(),
            to_address: record.to_address.to_vec(),
            amount: record.amount.to_string(),
        }
    }
}

impl TryFrom<&Transfer> for TransferRecord {
    type Error = eyre::Report;

    fn try_from(row: &Transfer) -> Result<Self> {
        Ok(Self {
            transaction_hash: TxHash::try_from(row.transaction_hash.as_slice())
                .map_err(|_| eyre!("malformed transaction_hash"))?,
            block_number: u64::try_from(row.block_number)?,
            log_index: u64::try_from(row.log_index)?,
            token_address: address(&row.token_address, "token_address")?,
            from_address: address(&row.from_address, "from_address")?,
            to_address: address(&row.to_address, "to_address")?,
            amount: row.amount.parse::<U256>()?,
        })
    }
}

impl TryFrom<&FailedLogRecord> for FailedLog {
    type Error = eyre::Report;

    fn try_from(record: &FailedLogRecord) -> Result<Self> {
        Ok(Self {
            raw_log: serde_json::to_string(&record.raw_log)?,
            error_message: record.error_message.clone(),
        })
    }
}

impl From<&TokenMetadata> for Token {
    fn from(metadata: &TokenMetadata) -> Self {
        Self {
            token_address: metadata.token_address.to_vec(),
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            decimals: metadata.decimals.into(),
        }
    }
}

impl TryFrom<&Token> for TokenMetadata {
    type Error = eyre::Report;

    fn try_from(row: &Token) -> Result<Self> {
        Ok(Self {
            token_address: address(&row.token_address, "token_address")?,
            name: row.name.clone(),
            symbol: row.symbol.clone(),
            decimals: u8::try_from(row.decimals)?,
        })
    }
}

pub(crate) fn address(bytes: &[u8], field: &str) -> Result<Address> {
    Address::try_from(bytes).map_err(|_| eyre!("malformed {field}: {} bytes", bytes.len()))
}
