use alloy::primitives::{B256, BlockNumber, keccak256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Transfer,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Transfer => "Transfer(address,address,uint256)",
        }
    }

    /// topic0 of every log emitted for this event.
    pub fn topic(&self) -> B256 {
        keccak256(self.as_str())
    }
}

/// Inclusive block window `[from_block_number, to_block_number]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkFilter {
    pub event: EventType,
    pub from_block_number: BlockNumber,
    pub to_block_number: BlockNumber,
}
