use serde::{Serialize, ser::SerializeStruct};
use store::{
    checkpoint::model::Checkpoint, failed::model::FailedLog, token::model::Token,
    transfer::model::Transfer, utils,
};

// Tuple wrapper for Checkpoint
pub struct CheckpointResponse(pub Checkpoint);

impl Serialize for CheckpointResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Checkpoint", 1)?;
        state.serialize_field("block_number", &self.0.block_number)?;
        state.end()
    }
}

// Tuple wrapper for Transfer
pub struct TransferResponse(pub Transfer);

impl Serialize for TransferResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let t = &self.0;
        let mut state = serializer.serialize_struct("Transfer", 7)?;
        state.serialize_field("block_number", &t.block_number)?;
        state.serialize_field("transaction_hash", &utils::bytes_to_hex(&t.transaction_hash))?;
        state.serialize_field("log_index", &t.log_index)?;
        state.serialize_field("token_address", &utils::bytes_to_address(&t.token_address))?;
        state.serialize_field("from_address", &utils::bytes_to_address(&t.from_address))?;
        state.serialize_field("to_address", &utils::bytes_to_address(&t.to_address))?;
        state.serialize_field("amount", &t.amount)?;
        state.end()
    }
}

// Tuple wrapper for Token
pub struct TokenResponse(pub Token);

impl Serialize for TokenResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let t = &self.0;
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("token_address", &utils::bytes_to_address(&t.token_address))?;
        state.serialize_field("name", &t.name)?;
        state.serialize_field("symbol", &t.symbol)?;
        state.serialize_field("decimals", &t.decimals)?;
        state.end()
    }
}

// Tuple wrapper for FailedLog
pub struct FailedLogResponse(pub FailedLog);

impl Serialize for FailedLogResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let f = &self.0;
        // stored as JSON text, re-emit it as a nested object when it parses
        let raw_log = serde_json::from_str::<serde_json::Value>(&f.raw_log)
            .unwrap_or_else(|_| serde_json::Value::String(f.raw_log.clone()));
        let mut state = serializer.serialize_struct("FailedLog", 2)?;
        state.serialize_field("raw_log", &raw_log)?;
        state.serialize_field("error_message", &f.error_message)?;
        state.end()
    }
}
