//! Content metadata signatures (the header of `ContentMeta.xbx`),
//! used by downloadable content and title updates.

use log::debug;

use crate::error::SignatureResult;
use crate::types::{ConsoleKey, ContentSignatureKey, Signature, TitleId};

use super::hmac_sha1;

/**
    Per-(title, console) key that signs content metadata.

      key = HMAC-SHA1(console_key, title_id as 4 little-endian bytes)
*/
pub fn content_signature_key(title_id: TitleId, console_key: &ConsoleKey) -> ContentSignatureKey {
    debug!("deriving content signature key for title {title_id}");
    Signature::new(hmac_sha1(console_key.as_bytes(), &title_id.to_le_bytes()))
}

/**
    Content signature. Always non-roamable since the key is console-bound.

      signature = HMAC-SHA1(content_signature_key, data)

    The full 20-byte derived key is used.
*/
pub fn content_signature(title_id: TitleId, console_key: &ConsoleKey, data: &[u8]) -> Signature {
    let key = content_signature_key(title_id, console_key);
    debug!("calculating content signature over {} bytes", data.len());
    Signature::new(hmac_sha1(key.as_bytes(), data))
}

/**
    Content signature key over a raw console key buffer.
    Fails with `InvalidKeyLength` unless `console_key` is 16 bytes.
*/
pub fn compute_content_signature_key(
    title_id: u32,
    console_key: impl AsRef<[u8]>,
) -> SignatureResult<ContentSignatureKey> {
    let console_key = ConsoleKey::from_slice(console_key)?;
    Ok(content_signature_key(TitleId(title_id), &console_key))
}

/**
    Content signature over raw buffers.
*/
pub fn compute_content_non_roamable(
    title_id: u32,
    console_key: impl AsRef<[u8]>,
    data: impl AsRef<[u8]>,
) -> SignatureResult<Signature> {
    let console_key = ConsoleKey::from_slice(console_key)?;
    Ok(content_signature(
        TitleId(title_id),
        &console_key,
        data.as_ref(),
    ))
}
