#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod crypto;
mod error;
mod savegame;
mod types;
mod utils;

pub use self::constants::{
    KEY_SIZE, SAVE_HASH_MODULUS, SAVE_ID_LEN, SIGNATURE_SIZE, XBOX_CERTIFICATE_KEY,
};
pub use self::crypto::calcsig::{
    auth_key, calculate_non_roamable, calculate_roamable, convert_to_non_roamable,
    non_roamable_signature, roamable_signature,
};
pub use self::crypto::contsig::{
    compute_content_non_roamable, compute_content_signature_key, content_signature,
    content_signature_key,
};
pub use self::error::{ParseError, SignatureError, SignatureResult};
pub use self::savegame::{encode_save_hash, encode_save_hash_wide};
pub use self::types::{
    ConsoleKey, ContentSignatureKey, SaveGameId, Signature, TitleId, TitleSignatureKey,
};
