//! Error types for trace decryption.

use thiserror::Error;

/// Errors that can occur while decrypting a trace line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptionError {
    #[error("Encryption Error | Line has no timestamp tag: {0}")]
    MissingTimestamp(String),

    #[error("Encryption Error | Key must be 16 bytes, got {0}")]
    KeyLength(usize),

    #[error("Encryption Error | Invalid base64 payload: {0}")]
    Base64(String),

    #[error("Encryption Error | Payload too short: {0} bytes")]
    PayloadTooShort(usize),

    #[error("Encryption Error | Invalid padding")]
    Padding,

    #[error("Encryption Error | Plaintext is not UTF-8")]
    Utf8,

    #[error("Encryption Error | Plaintext is not a JSON object: {0}")]
    Json(String),

    #[error("Encryption Error | Plaintext has no content field")]
    MissingContent,
}
