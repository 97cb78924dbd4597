//! Gamesave signatures, the equivalent of `XCalculateSignatureBegin`/`Update`/`End`
//! and `XapiConvertSignatureToNonRoamable`.

use log::debug;

use crate::constants::{KEY_SIZE, XBOX_CERTIFICATE_KEY};
use crate::error::SignatureResult;
use crate::types::{ConsoleKey, Signature, TitleSignatureKey};

use super::hmac_sha1;

/**
    Mix a title's signature key with the certificate key.

      auth_key = HMAC-SHA1(XBOX_CERTIFICATE_KEY, title_signature_key)[0..16]

    Only the first 16 bytes of the digest are kept; the next stage keys
    HMAC with exactly those 16 bytes.
*/
pub fn auth_key(title_signature_key: &TitleSignatureKey) -> [u8; KEY_SIZE] {
    let digest = hmac_sha1(&XBOX_CERTIFICATE_KEY, title_signature_key.as_bytes());
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&digest[..KEY_SIZE]);
    key
}

/**
    Roamable signature: verifiable on any console running the same title.

      signature = HMAC-SHA1(auth_key, data)
*/
pub fn roamable_signature(title_signature_key: &TitleSignatureKey, data: &[u8]) -> Signature {
    debug!("calculating roamable signature over {} bytes", data.len());
    Signature::new(hmac_sha1(&auth_key(title_signature_key), data))
}

/**
    Bind a roamable signature to one console.

      signature = HMAC-SHA1(console_key, roamable)
*/
pub fn convert_to_non_roamable(console_key: &ConsoleKey, roamable: &Signature) -> Signature {
    Signature::new(hmac_sha1(console_key.as_bytes(), roamable.as_bytes()))
}

/**
    Non-roamable signature: reproducible only with the console key of the
    console that wrote the data.
*/
pub fn non_roamable_signature(
    title_signature_key: &TitleSignatureKey,
    console_key: &ConsoleKey,
    data: &[u8],
) -> Signature {
    debug!("calculating non-roamable signature over {} bytes", data.len());
    convert_to_non_roamable(console_key, &roamable_signature(title_signature_key, data))
}

/**
    Roamable signature over raw buffers.
    Fails with `InvalidKeyLength` unless `title_signature_key` is 16 bytes.
*/
pub fn calculate_roamable(
    title_signature_key: impl AsRef<[u8]>,
    data: impl AsRef<[u8]>,
) -> SignatureResult<Signature> {
    let title_signature_key = TitleSignatureKey::from_slice(title_signature_key)?;
    Ok(roamable_signature(&title_signature_key, data.as_ref()))
}

/**
    Non-roamable signature over raw buffers.
    Both keys are validated before anything is hashed.
*/
pub fn calculate_non_roamable(
    title_signature_key: impl AsRef<[u8]>,
    console_key: impl AsRef<[u8]>,
    data: impl AsRef<[u8]>,
) -> SignatureResult<Signature> {
    let title_signature_key = TitleSignatureKey::from_slice(title_signature_key)?;
    let console_key = ConsoleKey::from_slice(console_key)?;
    Ok(non_roamable_signature(
        &title_signature_key,
        &console_key,
        data.as_ref(),
    ))
}
