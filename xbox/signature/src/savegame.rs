//! Save folder identifiers, the equivalent of `XapiSaveGameHashEncode`.
//!
//! Unrelated to the signature chain: a plain 48-bit polynomial hash of the
//! save name, printed as 12 hex digits.

use crate::constants::{SAVE_HASH_MODULUS, SAVE_ID_LEN};
use crate::types::SaveGameId;
use crate::utils::nibble_to_char;

/**
    Fold name units into the 48-bit accumulator.

      hash = (unit + (hash << 16)) mod 0xFFFFFFFFFFC5

    `hash` stays below 2^48 and units are at most 16 bits wide, so the
    shift and add never overflow.
*/
fn save_hash(units: impl IntoIterator<Item = u16>) -> u64 {
    units.into_iter().fold(0u64, |hash, unit| {
        (u64::from(unit) + (hash << 16)) % SAVE_HASH_MODULUS
    })
}

/**
    Render the accumulator as 12 hex digits.

    Nibbles are extracted from bit 0 upwards and written from the last
    character backwards, so bits 44..48 land in the first character.
*/
fn encode_hash(hash: u64) -> SaveGameId {
    let mut chars = [0u8; SAVE_ID_LEN];
    for (i, slot) in chars.iter_mut().rev().enumerate() {
        *slot = nibble_to_char(((hash >> (i * 4)) & 0xF) as u8);
    }
    SaveGameId::from_ascii(chars)
}

/**
    Save identifier for a name given as bytes.
*/
pub fn encode_save_hash(name: impl AsRef<[u8]>) -> SaveGameId {
    encode_hash(save_hash(name.as_ref().iter().map(|&b| u16::from(b))))
}

/**
    Save identifier for a name given as UTF-16 code units, as the console API takes it.
*/
pub fn encode_save_hash_wide(name: impl AsRef<[u16]>) -> SaveGameId {
    encode_hash(save_hash(name.as_ref().iter().copied()))
}

impl SaveGameId {
    /**
        Save identifier for a save name, hashed as UTF-16.
        Agrees with [`encode_save_hash`] for ASCII names.
    */
    pub fn from_name(name: &str) -> Self {
        encode_hash(save_hash(name.encode_utf16()))
    }
}
