//! Signature derivation chains.
//!
//! ```text
//! XBOX_CERTIFICATE_KEY ─┐
//! title_signature_key ──┴─ HMAC ─ auth_key[0..16] ─┐
//!                                     data ────────┴─ HMAC ─ roamable ─┐
//!                                              console_key ────────────┴─ HMAC ─ non-roamable
//!
//! console_key ─┐
//! title_id LE ─┴─ HMAC ─ content_signature_key ─┐
//!                              data ────────────┴─ HMAC ─ content non-roamable
//! ```

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::constants::SIGNATURE_SIZE;

pub mod calcsig;
pub mod contsig;

type HmacSha1 = Hmac<Sha1>;

/**
    Single HMAC-SHA1 computation.
    Key: arbitrary bytes (callers always pass 16 or 20).
    Output: 20 bytes.
*/
fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; SIGNATURE_SIZE] {
    let mut mac =
        <HmacSha1 as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 2202, test case 2
    #[test]
    fn rfc2202_vector() {
        let mac = hmac_sha1(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(mac, hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"));
    }

    #[test]
    fn empty_message() {
        let mac = hmac_sha1(&[0u8; 16], &[]);
        assert_eq!(mac.len(), SIGNATURE_SIZE);
        assert_eq!(mac, hmac_sha1(&[0u8; 16], b""));
    }
}
