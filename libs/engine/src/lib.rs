pub mod adapter;
pub mod args;
pub mod balance;
pub mod coordinator;
pub mod decoder;
pub mod locator;
pub mod model;
pub mod processor;
pub mod resolver;
pub mod ledger {
    pub mod handle;
    pub mod sqlite;
}
pub mod source {
    pub mod filter;
    pub mod handle;
    pub mod log;
}
