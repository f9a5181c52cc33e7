#![allow(dead_code)]

use alloy::primitives::{Address, B256, BlockNumber, Bytes, TxHash, U256};
use engine::ledger::handle::{CommitStats, Ledger, PendingBatch};
use engine::ledger::sqlite::SqliteLedger;
use engine::model::{TokenMetadata, TransferRecord};
use engine::source::filter::ChunkFilter;
use engine::source::handle::{BlockStamp, Source};
use engine::source::log::RawLog;
use eyre::{Result, eyre};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use store::client::Client;

pub const BLOCK_TIME: u64 = 12;

/// Synthetic chain: block `n` has timestamp `genesis + n * BLOCK_TIME`.
pub struct FakeChain {
    timestamps: Vec<u64>,
    head: AtomicU64,
    logs: Vec<(BlockNumber, RawLog)>,
    tokens: HashMap<Address, TokenMetadata>,
    failing_block: Mutex<Option<BlockNumber>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    log_requests: Mutex<Vec<(BlockNumber, BlockNumber)>>,
    metadata_requests: Mutex<Vec<Address>>,
}

impl FakeChain {
    pub fn new(blocks: u64) -> Self {
        Self::with_timestamps((0..blocks).map(|n| 1_700_000_000 + n * BLOCK_TIME).collect())
    }

    pub fn with_timestamps(timestamps: Vec<u64>) -> Self {
        let head = timestamps.len().saturating_sub(1) as u64;
        Self {
            timestamps,
            head: AtomicU64::new(head),
            logs: Vec::new(),
            tokens: HashMap::new(),
            failing_block: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            log_requests: Mutex::new(Vec::new()),
            metadata_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_log(mut self, block_number: BlockNumber, log: RawLog) -> Self {
        self.logs.push((block_number, log));
        self
    }

    pub fn with_token(mut self, token_address: Address, symbol: &str, decimals: u8) -> Self {
        self.tokens.insert(
            token_address,
            TokenMetadata {
                token_address,
                name: format!("{symbol} Token"),
                symbol: symbol.to_string(),
                decimals,
            },
        );
        self
    }

    pub fn set_head(&self, head: BlockNumber) {
        self.head.store(head, Ordering::SeqCst);
    }

    /// Any `logs_in_range` call covering `block_number` fails until cleared.
    pub fn fail_logs_at(&self, block_number: Option<BlockNumber>) {
        *self.failing_block.lock().unwrap() = block_number;
    }

    pub fn log_requests(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.log_requests.lock().unwrap().clone()
    }

    pub fn metadata_requests(&self) -> Vec<Address> {
        self.metadata_requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Source for FakeChain {
    async fn current_height(&self) -> Result<BlockNumber> {
        Ok(self.head.load(Ordering::SeqCst))
    }

    async fn block_by_number(&self, number: BlockNumber) -> Result<BlockStamp> {
        let timestamp = self
            .timestamps
            .get(number as usize)
            .copied()
            .ok_or_else(|| eyre!("Block not found: {number}"))?;
        Ok(BlockStamp { number, timestamp })
    }

    async fn logs_in_range(&self, filter: ChunkFilter) -> Result<Vec<RawLog>> {
        let range = filter.from_block_number..=filter.to_block_number;
        self.log_requests.lock().unwrap().push((*range.start(), *range.end()));

        if let Some(failing) = *self.failing_block.lock().unwrap() {
            if range.contains(&failing) {
                return Err(eyre!("connection reset while fetching block {failing}"));
            }
        }

        Ok(self
            .logs
            .iter()
            .filter(|(block_number, _)| range.contains(block_number))
            .map(|(_, log)| log.clone())
            .collect())
    }

    async fn token_metadata(&self, token_address: Address) -> Result<TokenMetadata> {
        self.metadata_requests.lock().unwrap().push(token_address);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // let the other lookups of the group start before this one settles
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.tokens.get(&token_address).cloned().ok_or_else(|| eyre!("execution reverted"))
    }
}

/// SQLite ledger whose commits fail for any window ending at or after a set block.
pub struct FlakyLedger {
    inner: SqliteLedger,
    failing_from: Mutex<Option<BlockNumber>>,
}

impl FlakyLedger {
    pub fn new(client: Client) -> Self {
        Self { inner: SqliteLedger::new(client), failing_from: Mutex::new(None) }
    }

    pub fn fail_commits_from(&self, block_number: Option<BlockNumber>) {
        *self.failing_from.lock().unwrap() = block_number;
    }
}

#[async_trait::async_trait]
impl Ledger for FlakyLedger {
    async fn checkpoint(&self) -> Result<Option<BlockNumber>> {
        self.inner.checkpoint().await
    }

    async fn commit(&self, batch: &PendingBatch) -> Result<CommitStats> {
        let failing_from = *self.failing_from.lock().unwrap();
        if failing_from.is_some_and(|failing| batch.to_block >= failing) {
            return Err(eyre!("database is locked"));
        }
        self.inner.commit(batch).await
    }

    async fn token_addresses(&self) -> Result<HashSet<Address>> {
        self.inner.token_addresses().await
    }

    async fn token(&self, token_address: Address) -> Result<Option<TokenMetadata>> {
        self.inner.token(token_address).await
    }

    async fn transfers_by_recipient(&self, wallet: Address) -> Result<Vec<TransferRecord>> {
        self.inner.transfers_by_recipient(wallet).await
    }

    async fn transfers_by_sender(&self, wallet: Address) -> Result<Vec<TransferRecord>> {
        self.inner.transfers_by_sender(wallet).await
    }
}

pub fn transfer_log(
    block_number: BlockNumber,
    log_index: u64,
    token: Address,
    from: Address,
    to: Address,
    amount: u64,
) -> RawLog {
    RawLog {
        address: Some(token),
        topics: vec![B256::repeat_byte(0xDD), from.into_word(), to.into_word()],
        data: Bytes::from(U256::from(amount).to_be_bytes::<32>().to_vec()),
        // unique per (block, log_index) so distinct logs never collide in the ledger
        transaction_hash: Some(TxHash::from(
            U256::from((block_number << 16) | log_index).to_be_bytes::<32>(),
        )),
        block_number: Some(block_number),
        log_index: Some(log_index),
    }
}

pub async fn memory_client() -> Result<Client> {
    Client::init("sqlite::memory:").await
}
