use core::fmt;
use core::str::FromStr;

use crate::constants::{KEY_SIZE, SAVE_ID_LEN, SIGNATURE_SIZE};
use crate::error::{ParseError, SignatureError, SignatureResult};
use crate::utils::{key_from_hex, key_from_slice};

/**
    Signature key stored in the certificate of a title's executable.

    `Debug` does not print the key bytes.
*/
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TitleSignatureKey([u8; KEY_SIZE]);

impl TitleSignatureKey {
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /**
        Create a key from a byte slice that must be exactly 16 bytes long.
    */
    pub fn from_slice(bytes: impl AsRef<[u8]>) -> SignatureResult<Self> {
        key_from_slice(bytes.as_ref()).map(Self)
    }

    /**
        Parse a key from 32 hex digits.
    */
    pub fn from_hex(s: impl AsRef<[u8]>) -> SignatureResult<Self> {
        key_from_hex(s.as_ref()).map(Self)
    }

    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for TitleSignatureKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for TitleSignatureKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for TitleSignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TitleSignatureKey(..)")
    }
}

/**
    Console-unique key (the "XboxHDKey") stored in the EEPROM configuration data.

    `Debug` does not print the key bytes.
*/
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ConsoleKey([u8; KEY_SIZE]);

impl ConsoleKey {
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /**
        Create a key from a byte slice that must be exactly 16 bytes long.
    */
    pub fn from_slice(bytes: impl AsRef<[u8]>) -> SignatureResult<Self> {
        key_from_slice(bytes.as_ref()).map(Self)
    }

    /**
        Parse a key from 32 hex digits.
    */
    pub fn from_hex(s: impl AsRef<[u8]>) -> SignatureResult<Self> {
        key_from_hex(s.as_ref()).map(Self)
    }

    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for ConsoleKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for ConsoleKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for ConsoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsoleKey(..)")
    }
}

/**
    Title identifier from the certificate of a title's executable.

    Serialized little-endian wherever it is hashed. `Display` prints
    8 uppercase hex digits (e.g. `4D530004`).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TitleId(pub u32);

impl TitleId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /**
        The 4-byte little-endian form used as an HMAC message.
    */
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<u32> for TitleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/**
    Parse a title ID from exactly 8 hex digits, with an optional `0x` prefix.
*/
impl FromStr for TitleId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError {
            kind: "title id",
            value: s.to_owned(),
        };
        let digits = s.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        u32::from_str_radix(digits, 16).map(Self).map_err(|_| err())
    }
}

/**
    A 20-byte HMAC-SHA1 output: a roamable, non-roamable or content signature,
    or a derived content signature key.

    `Display` prints 40 lowercase hex digits.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub const fn new(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SIGNATURE_SIZE]> for Signature {
    fn from(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_SIZE] {
    fn from(sig: Signature) -> Self {
        sig.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; SIGNATURE_SIZE]> for Signature {
    fn eq(&self, other: &[u8; SIGNATURE_SIZE]) -> bool {
        &self.0 == other
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

/**
    Key that signs content metadata for one (title, console) pair.
    Recomputed on demand, never stored.
*/
pub type ContentSignatureKey = Signature;

/**
    12-character uppercase hex identifier derived from a save name.
    Used as the save's folder name (`\UDATA\<TitleId>\<SaveGameId>\`).
*/
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveGameId(String);

impl SaveGameId {
    pub(crate) fn from_ascii(chars: [u8; SAVE_ID_LEN]) -> Self {
        Self(chars.iter().map(|&c| char::from(c)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SaveGameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SaveGameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keys_from_slice() {
        let key = TitleSignatureKey::from_slice([1u8; 16]).unwrap();
        assert_eq!(key.as_bytes(), &[1u8; 16]);
        let key = ConsoleKey::from_slice(vec![2u8; 16]).unwrap();
        assert_eq!(key.as_bytes(), &[2u8; 16]);
    }

    #[test]
    fn keys_reject_wrong_length() {
        let err = TitleSignatureKey::from_slice([0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            SignatureError::InvalidKeyLength {
                expected: 16,
                actual: 15
            }
        );
        let err = ConsoleKey::from_slice([0u8; 17]).unwrap_err();
        assert_eq!(
            err,
            SignatureError::InvalidKeyLength {
                expected: 16,
                actual: 17
            }
        );
    }

    #[test]
    fn keys_from_str() {
        let key: ConsoleKey = "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf".parse().unwrap();
        assert_eq!(key.as_bytes(), &hex!("a0a1a2a3a4a5a6a7a8a9aaabacadaeaf"));
        assert!("a0a1".parse::<TitleSignatureKey>().is_err());
    }

    #[test]
    fn key_debug_hides_material() {
        let key = ConsoleKey::new([0xAB; 16]);
        let debug = format!("{key:?}");
        assert!(!debug.to_lowercase().contains("ab"));
        let key = TitleSignatureKey::new([0xCD; 16]);
        assert!(!format!("{key:?}").to_lowercase().contains("cd"));
    }

    #[test]
    fn title_id_le_bytes() {
        assert_eq!(TitleId(0x01020304).to_le_bytes(), [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn title_id_display() {
        assert_eq!(TitleId(0x4D530004).to_string(), "4D530004");
        assert_eq!(TitleId(0x1).to_string(), "00000001");
    }

    #[test]
    fn title_id_parse() {
        assert_eq!("4D530004".parse::<TitleId>().unwrap(), TitleId(0x4D530004));
        assert_eq!("0x4d530004".parse::<TitleId>().unwrap(), TitleId(0x4D530004));
        assert_eq!("0X00000001".parse::<TitleId>().unwrap(), TitleId(1));
    }

    #[test]
    fn title_id_parse_rejects() {
        for s in ["", "4D53", "4D5300041", "0x", "+4D53000", "4D53000G"] {
            let err = s.parse::<TitleId>().unwrap_err();
            assert_eq!(err.kind, "title id");
        }
    }

    #[test]
    fn signature_hex() {
        let sig = Signature::new(hex!("b8008f141042af7f3be5f8abeb8017f1e7ef471e"));
        assert_eq!(sig.to_string(), "b8008f141042af7f3be5f8abeb8017f1e7ef471e");
        assert_eq!(
            format!("{sig:?}"),
            "Signature(b8008f141042af7f3be5f8abeb8017f1e7ef471e)"
        );
        assert_eq!(sig.as_ref().len(), 20);
    }

    #[test]
    fn save_game_id_string() {
        let id = SaveGameId::from_ascii(*b"1A0557BD2686");
        assert_eq!(id.as_str(), "1A0557BD2686");
        assert_eq!(id.to_string(), "1A0557BD2686");
        assert_eq!(id.into_string(), "1A0557BD2686");
    }
}
