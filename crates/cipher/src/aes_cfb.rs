//! AES-128-CFB decryption of base64url tokens.
//!
//! # Token Format
//!
//! ```text
//! base64url( IV[16] || AES-128-CFB( padded JSON {"content": "<line>"} ) )
//! ```
//!
//! Base64 padding is optional. The last plaintext byte gives the number of
//! padding bytes to drop.

use crate::error::DecryptionError;
use crate::Decryptor;
use aes::Aes128;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use serde::Deserialize;

const KEY_LEN: usize = 16;
const IV_LEN: usize = 16;

/// URL-safe alphabet, padding optional, lenient trailing bits.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

type Aes128CfbDec = cfb_mode::Decryptor<Aes128>;

#[derive(Deserialize)]
struct Envelope {
    content: Option<String>,
}

/// Decrypts tokens with a fixed 16-byte key.
#[derive(Clone)]
pub struct AesCfbDecryptor {
    key: [u8; KEY_LEN],
}

impl std::fmt::Debug for AesCfbDecryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCfbDecryptor").finish_non_exhaustive()
    }
}

impl AesCfbDecryptor {
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Use the bytes of `key`, which must be exactly 16 bytes long.
    pub fn from_key_str(key: &str) -> Result<Self, DecryptionError> {
        let key: [u8; KEY_LEN] = key
            .as_bytes()
            .try_into()
            .map_err(|_| DecryptionError::KeyLength(key.len()))?;
        Ok(Self::new(key))
    }

    fn decrypt_bytes(&self, token: &str) -> Result<Vec<u8>, DecryptionError> {
        let payload = TOKEN_ENGINE
            .decode(token)
            .map_err(|e| DecryptionError::Base64(e.to_string()))?;
        if payload.len() < IV_LEN {
            return Err(DecryptionError::PayloadTooShort(payload.len()));
        }

        let (iv, ciphertext) = payload.split_at(IV_LEN);
        let mut buffer = ciphertext.to_vec();
        Aes128CfbDec::new_from_slices(&self.key, iv)
            .map_err(|_| DecryptionError::KeyLength(self.key.len()))?
            .decrypt(&mut buffer);

        let pad = usize::from(*buffer.last().ok_or(DecryptionError::Padding)?);
        if pad == 0 || pad > buffer.len() {
            return Err(DecryptionError::Padding);
        }
        buffer.truncate(buffer.len() - pad);
        Ok(buffer)
    }
}

impl Decryptor for AesCfbDecryptor {
    fn decrypt(&self, token: &str) -> Result<String, DecryptionError> {
        let plaintext =
            String::from_utf8(self.decrypt_bytes(token)?).map_err(|_| DecryptionError::Utf8)?;
        let envelope: Envelope = serde_json::from_str(plaintext.trim())
            .map_err(|e| DecryptionError::Json(e.to_string()))?;
        envelope.content.ok_or(DecryptionError::MissingContent)
    }
}
