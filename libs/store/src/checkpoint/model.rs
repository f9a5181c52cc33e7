use sqlx::FromRow;

/// Last block whose events are durably persisted.
#[derive(Debug, Clone, Copy, FromRow, PartialEq, Eq)]
pub struct Checkpoint {
    pub block_number: i64,
}
