use crate::{
    checkpoint::model::Checkpoint, failed::model::FailedLog, token::model::Token,
    transfer::model::Transfer,
};

/// Everything one block window produced, committed together with the checkpoint
/// that marks the window as done.
#[derive(Debug, Clone)]
pub struct Batch {
    pub checkpoint: Checkpoint,
    pub transfers: Vec<Transfer>,
    pub failed_logs: Vec<FailedLog>,
    pub tokens: Vec<Token>,
}

/// Rows actually written by a commit; replays of an already-committed batch report zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Committed {
    pub blocks: u64,
    pub transfers: u64,
    pub failed_logs: u64,
    pub tokens: u64,
}
