use sqlx::FromRow;

#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct Transfer {
    pub block_number: i64,
    pub transaction_hash: Vec<u8>,
    pub log_index: i64,
    pub token_address: Vec<u8>,
    pub from_address: Vec<u8>,
    pub to_address: Vec<u8>,
    // raw on-chain units, base-10
    pub amount: String,
}
