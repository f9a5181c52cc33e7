use sqlx::FromRow;

#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct Token {
    pub token_address: Vec<u8>,
    pub name: String,
    pub symbol: String,
    pub decimals: i64,
}
