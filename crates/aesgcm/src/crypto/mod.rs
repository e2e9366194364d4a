//! AES-GCM authenticated encryption and its collaborators.
//!
//! # Ciphertext format
//!
//! ```text
//! nonce (12) || encrypted plaintext (n) || tag (16)
//! ```
//!
//! The AES block cipher and the GHASH authenticator come from the audited
//! RustCrypto `aes-gcm` crate behind [`BlockCipherAead`]; nonces come from
//! [`SecureRandom`]. This module only frames, validates, and composes them.

pub mod cipher;
pub mod primitive;
pub mod random;

pub use cipher::{generate_key, AesGcmCipher, CipherKey, KeySize, AES_128_KEY_LEN, AES_256_KEY_LEN};
pub use primitive::{BlockCipherAead, RustCryptoGcm};
pub use random::{OsRandom, SecureRandom};

use common::GcmError;

/// Authenticated encryption with associated data.
///
/// Nullable inputs are modelled as `Option`; an absent byte sequence that
/// the operation requires fails with [`GcmError::NullInput`].
pub trait Aead {
    /// Encrypt and authenticate `plaintext` together with `aad`.
    fn encrypt(&self, plaintext: Option<&[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>, GcmError>;

    /// Verify and decrypt `ciphertext` against `aad`.
    fn decrypt(&self, ciphertext: Option<&[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>, GcmError>;
}

/// Absent associated data is empty associated data.
pub fn normalize_aad(aad: Option<&[u8]>) -> &[u8] {
    aad.unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_aad_is_empty() {
        assert!(normalize_aad(None).is_empty());
        assert!(normalize_aad(Some(&[])).is_empty());
        assert_eq!(normalize_aad(Some(b"ad")), b"ad");
    }
}
