use alloy::primitives::Address;

pub fn parse_address(input: &str) -> Result<Address, String> {
    input.trim().parse::<Address>().map_err(|e| format!("`{input}` is not a valid address: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_and_checksummed_addresses() {
        let lower = parse_address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
        let checksummed = parse_address(" 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045 ").unwrap();
        assert_eq!(lower, checksummed);
    }

    #[test]
    fn rejects_short_addresses() {
        assert!(parse_address("0x1234").is_err());
    }
}
