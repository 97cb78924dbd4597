use crate::constants::KEY_SIZE;
use crate::error::{SignatureError, SignatureResult};

/**
    Copy a 16-byte key out of a slice.
    Short or long input is rejected, never padded or truncated.
*/
pub(crate) fn key_from_slice(bytes: &[u8]) -> SignatureResult<[u8; KEY_SIZE]> {
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })
}

/**
    Decode a 16-byte key from 32 hex digits (either case, surrounding
    whitespace ignored).
*/
pub(crate) fn key_from_hex(s: &[u8]) -> SignatureResult<[u8; KEY_SIZE]> {
    let mut key = [0u8; KEY_SIZE];
    hex::decode_to_slice(s.trim_ascii(), &mut key)
        .map_err(|e| SignatureError::InvalidHex(e.to_string()))?;
    Ok(key)
}

/**
    Uppercase hex character for a nibble. Only the low four bits are used.
*/
pub(crate) const fn nibble_to_char(nibble: u8) -> u8 {
    let v = nibble & 0xF;
    if v > 9 { b'A' + (v - 10) } else { b'0' + v }
}
