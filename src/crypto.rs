use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// AES-256-GCM nonce length used by the credential encryption tooling.
const NONCE_SIZE: usize = 12;

/// Decrypt an embedded credential blob.
///
/// The blob is base64(nonce || ciphertext || tag). The key must be exactly
/// 32 bytes; a wrong key or tampered payload fails authentication.
pub fn decrypt_credential(key: &[u8], blob_b64: &str) -> Result<Vec<u8>> {
    if key.len() != 32 {
        anyhow::bail!(
            "invalid encryption key length: {} (expected 32 bytes for AES-256)",
            key.len()
        );
    }

    let decoded = BASE64
        .decode(blob_b64.trim())
        .context("failed to decode base64 credential blob")?;
    if decoded.len() <= NONCE_SIZE {
        anyhow::bail!(
            "credential blob too short: {} bytes (expected nonce + ciphertext)",
            decoded.len()
        );
    }

    let (nonce, ciphertext) = decoded.split_at(NONCE_SIZE);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| anyhow::anyhow!("failed to decrypt credential: key mismatch or corrupted blob"))
}
