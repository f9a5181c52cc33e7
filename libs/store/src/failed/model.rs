use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct FailedLog {
    // JSON-encoded log exactly as received from the node
    pub raw_log: String,
    pub error_message: String,
}
