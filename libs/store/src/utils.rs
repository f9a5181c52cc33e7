use alloy::{hex, primitives::Address};

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn bytes_to_address(bytes: &[u8]) -> String {
    match Address::try_from(bytes) {
        Ok(addr) => format!("{addr:?}"),
        Err(_) => format!("<invalid address length {}: {}>", bytes.len(), bytes_to_hex(bytes)),
    }
}
