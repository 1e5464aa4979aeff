use alloy_primitives::{hex, Address};
use tracing::warn;

use crate::error::{Error, Result};

const ADDRESS_LEN: usize = 20;

/// Decode a hex string, with or without a `0x` prefix
///
/// Malformed input fails with [`Error::Decode`] naming the input.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(digits).map_err(|e| {
        warn!(input, error = %e, "failed to decode hex");
        Error::decode(input, e)
    })
}

/// Decode a 20-byte hex address
pub fn hex_to_address(input: &str) -> Result<Address> {
    let bytes = hex_to_bytes(input)?;
    if bytes.len() != ADDRESS_LEN {
        return Err(Error::decode(
            input,
            format!("expected 20 bytes, got {}", bytes.len()),
        ));
    }
    Ok(Address::from_slice(&bytes))
}
