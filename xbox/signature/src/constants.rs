use hex_literal::hex;

/**
    Size in bytes of the 16-byte secrets used as HMAC keys:
    the title signature key, the console key and the certificate key.
*/
pub const KEY_SIZE: usize = 0x10;

/**
    Size in bytes of every derived key and signature (one HMAC-SHA1 digest).
*/
pub const SIGNATURE_SIZE: usize = 0x14;

/**
    Certificate key hard-coded in the console kernel.

    Mixed with a title's signature key to produce the auth key that signs
    gamesave data. Identical on every console and for every title.
*/
pub const XBOX_CERTIFICATE_KEY: [u8; KEY_SIZE] = hex!("5c0733ae0401f7e8ba7993fdcd2f1fe0");

/**
    Modulus of the save-name hash. Keeps the accumulator below 2^48.
*/
pub const SAVE_HASH_MODULUS: u64 = 0xFFFF_FFFF_FFC5;

/**
    Number of characters in a save game identifier (one per nibble of the 48-bit hash).
*/
pub const SAVE_ID_LEN: usize = 12;
