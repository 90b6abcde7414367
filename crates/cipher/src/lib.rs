//! Decryption of obfuscated candidate trace lines.
//!
//! Candidate programs may emit every trace line as `[<time>]<token>`, where
//! the token hides the real line. A [`Decryptor`] recovers it; the judge then
//! parses the recovered line as if it had been printed in clear.

mod aes_cfb;
mod error;

pub use aes_cfb::AesCfbDecryptor;
pub use error::DecryptionError;

use liftcheck_types::strip_timestamp;
use tracing::debug;

/// Recovers a plaintext trace line from an opaque token.
pub trait Decryptor: Send + Sync {
    /// Decrypt a bare token.
    fn decrypt(&self, token: &str) -> Result<String, DecryptionError>;

    /// Decrypt a whole line, dropping its leading `[<time>]` tag.
    ///
    /// The tag is not re-attached: the decrypted content carries its own.
    fn decrypt_line(&self, line: &str) -> Result<String, DecryptionError> {
        let token = strip_timestamp(line)
            .ok_or_else(|| DecryptionError::MissingTimestamp(line.to_string()))?;
        self.decrypt(token)
            .inspect_err(|e| debug!(line, error = %e, "Decryption failed"))
    }
}
