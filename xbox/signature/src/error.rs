use thiserror::Error;

/**
    Errors from signature derivation and key parsing.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/**
    Error returned by `FromStr` implementations on identifier types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Type alias for results that may return a [`SignatureError`].
*/
pub type SignatureResult<T> = std::result::Result<T, SignatureError>;
