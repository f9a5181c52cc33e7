//! Wallet balances replayed from the transfer ledger.
//!
//! Quantities are accumulated as `f64`, so very large or very precise balances are
//! approximate. A balance can be negative when the wallet spent tokens it received
//! before the indexed window began.
use alloy::primitives::{Address, U256};
use eyre::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::ledger::handle::Ledger;
use crate::model::{TokenMetadata, TransferRecord};

// f64 carries ~15 significant decimal digits; more fractional digits would only print noise.
const MAX_DISPLAY_DECIMALS: usize = f64::DIGITS as usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub token_address: Address,
    pub name: String,
    pub symbol: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntry<'a> {
    Credit(&'a TransferRecord),
    Debit(&'a TransferRecord),
}

/// Recomputes `wallet`'s balances from scratch on every call.
/// A wallet without ledger rows yields an empty list.
pub async fn wallet_balances(ledger: &dyn Ledger, wallet: Address) -> Result<Vec<WalletBalance>> {
    let credits = ledger.transfers_by_recipient(wallet).await?;
    let debits = ledger.transfers_by_sender(wallet).await?;

    let token_addresses: BTreeSet<Address> =
        credits.iter().chain(&debits).map(|transfer| transfer.token_address).collect();

    let mut tokens = HashMap::with_capacity(token_addresses.len());
    for token_address in token_addresses {
        match ledger.token(token_address).await? {
            Some(metadata) => {
                tokens.insert(token_address, metadata);
            }
            None => tracing::debug!("Skip: no metadata for token {token_address}"),
        }
    }

    let entries =
        credits.iter().map(LedgerEntry::Credit).chain(debits.iter().map(LedgerEntry::Debit));

    aggregate(entries, &tokens)
}

/// Folds ledger entries into one balance per token. Entries for tokens missing from
/// `tokens` contribute nothing. Output is ordered by token address.
pub fn aggregate<'a>(
    entries: impl IntoIterator<Item = LedgerEntry<'a>>,
    tokens: &HashMap<Address, TokenMetadata>,
) -> Result<Vec<WalletBalance>> {
    let totals = entries.into_iter().try_fold(
        BTreeMap::<Address, f64>::new(),
        |mut totals, entry| -> Result<_> {
            let (transfer, sign) = match entry {
                LedgerEntry::Credit(transfer) => (transfer, 1.0),
                LedgerEntry::Debit(transfer) => (transfer, -1.0),
            };
            if let Some(token) = tokens.get(&transfer.token_address) {
                let quantity = to_quantity(transfer.amount, token.decimals)?;
                *totals.entry(transfer.token_address).or_insert(0.0) += sign * quantity;
            }
            Ok(totals)
        },
    )?;

    let balances = totals
        .into_iter()
        .filter_map(|(token_address, amount)| {
            tokens.get(&token_address).map(|token| WalletBalance {
                token_address,
                name: token.name.clone(),
                symbol: token.symbol.clone(),
                amount: format_amount(amount, token.decimals),
            })
        })
        .collect();

    Ok(balances)
}

/// Raw on-chain units scaled down by `10^decimals`.
fn to_quantity(amount: U256, decimals: u8) -> Result<f64> {
    let raw: f64 = amount.to_string().parse()?;
    Ok(raw / 10f64.powi(i32::from(decimals)))
}

fn format_amount(amount: f64, decimals: u8) -> String {
    let precision = usize::from(decimals).min(MAX_DISPLAY_DECIMALS);
    format!("{amount:.precision$}")
}
