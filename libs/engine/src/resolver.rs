use alloy::primitives::Address;
use futures_util::future::join_all;

use crate::model::TokenMetadata;
use crate::source::handle::Source;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedTokens {
    pub resolved: Vec<TokenMetadata>,
    pub failed: Vec<Address>,
}

/// Fetches metadata for `token_addresses`, at most `fan_out` requests in flight.
///
/// Addresses are taken in groups of `fan_out`; a group must fully settle before the next
/// one starts. A failing address is logged and left out of the result; it never aborts
/// the other lookups.
pub async fn resolve_tokens(
    source: &dyn Source,
    token_addresses: &[Address],
    fan_out: usize,
) -> ResolvedTokens {
    let mut tokens = ResolvedTokens::default();

    for group in token_addresses.chunks(fan_out.max(1)) {
        let lookups = group.iter().map(|&token_address| async move {
            (token_address, source.token_metadata(token_address).await)
        });

        for (token_address, result) in join_all(lookups).await {
            match result {
                Ok(metadata) => tokens.resolved.push(metadata),
                Err(e) => {
                    tracing::warn!("Skip: Failed to fetch metadata for {token_address} - {e:?}");
                    tokens.failed.push(token_address);
                }
            }
        }
    }

    tokens
}
