use alloy::sol;

// Optional ERC-20 metadata extension. Not every token contract implements it,
// so callers must expect any of these calls to revert.
sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Metadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
