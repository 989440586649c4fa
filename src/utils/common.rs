use crate::Result;

/// Base58 encode `data` with a trailing 4-byte double-SHA256 checksum.
pub(crate) fn base58_encode_check(data: &[u8]) -> String {
    bitcoin::base58::encode_check(data)
}

/// Decode a base58 string and verify its trailing 4-byte checksum.
///
/// Returns the payload without the checksum.
pub(crate) fn base58_decode_check(data: &str) -> Result<Vec<u8>> {
    Ok(bitcoin::base58::decode_check(data)?)
}
