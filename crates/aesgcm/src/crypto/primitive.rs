//! Raw AES-GCM seal/open, delegated to the RustCrypto `aes-gcm` crate.
//!
//! Nothing here frames or generates nonces; that is the cipher's job. The
//! primitive only turns `(key, nonce, data, aad)` into `(body, tag)` and back.

use aes_gcm::{
    aead::{
        consts::{U12, U16},
        AeadCore, AeadInPlace, KeyInit,
    },
    Aes128Gcm, Aes256Gcm,
};
use common::{Nonce, SecurityFailure, Tag, TAG_LEN};

use super::cipher::{AES_128_KEY_LEN, AES_256_KEY_LEN};

/// Block-cipher AEAD capable of sealing and opening with a detached tag.
#[cfg_attr(test, mockall::automock)]
pub trait BlockCipherAead: Send + Sync {
    /// Encrypt `plaintext` and authenticate it together with `aad`.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityFailure::PrimitiveFailure`] if the key is not a valid
    /// AES key or the primitive refuses the input.
    fn seal(
        &self,
        key: &[u8],
        nonce: &Nonce,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Tag), SecurityFailure>;

    /// Verify `tag` over `body` and `aad`, then decrypt `body`.
    ///
    /// No plaintext is returned unless the tag verifies.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityFailure::AuthenticationFailure`] if verification fails.
    fn open(
        &self,
        key: &[u8],
        nonce: &Nonce,
        body: &[u8],
        tag: &Tag,
        aad: &[u8],
    ) -> Result<Vec<u8>, SecurityFailure>;
}

/// AES-128-GCM / AES-256-GCM from RustCrypto, selected by key length.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoGcm;

impl BlockCipherAead for RustCryptoGcm {
    fn seal(
        &self,
        key: &[u8],
        nonce: &Nonce,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Tag), SecurityFailure> {
        match key.len() {
            AES_128_KEY_LEN => seal_with::<Aes128Gcm>(key, nonce, plaintext, aad),
            AES_256_KEY_LEN => seal_with::<Aes256Gcm>(key, nonce, plaintext, aad),
            _ => Err(SecurityFailure::PrimitiveFailure),
        }
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &Nonce,
        body: &[u8],
        tag: &Tag,
        aad: &[u8],
    ) -> Result<Vec<u8>, SecurityFailure> {
        match key.len() {
            AES_128_KEY_LEN => open_with::<Aes128Gcm>(key, nonce, body, tag, aad),
            AES_256_KEY_LEN => open_with::<Aes256Gcm>(key, nonce, body, tag, aad),
            _ => Err(SecurityFailure::PrimitiveFailure),
        }
    }
}

fn seal_with<C>(
    key: &[u8],
    nonce: &Nonce,
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, Tag), SecurityFailure>
where
    C: KeyInit + AeadInPlace + AeadCore<NonceSize = U12, TagSize = U16>,
{
    let cipher = C::new_from_slice(key).map_err(|_| SecurityFailure::PrimitiveFailure)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(aes_gcm::aead::Nonce::<C>::from_slice(nonce), aad, &mut buffer)
        .map_err(|_| SecurityFailure::PrimitiveFailure)?;

    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(tag.as_slice());
    Ok((buffer, out))
}

fn open_with<C>(
    key: &[u8],
    nonce: &Nonce,
    body: &[u8],
    tag: &Tag,
    aad: &[u8],
) -> Result<Vec<u8>, SecurityFailure>
where
    C: KeyInit + AeadInPlace + AeadCore<NonceSize = U12, TagSize = U16>,
{
    let cipher = C::new_from_slice(key).map_err(|_| SecurityFailure::PrimitiveFailure)?;

    // aes-gcm checks the tag in constant time before applying the keystream.
    let mut buffer = body.to_vec();
    cipher
        .decrypt_in_place_detached(
            aes_gcm::aead::Nonce::<C>::from_slice(nonce),
            aad,
            &mut buffer,
            aes_gcm::aead::Tag::<C>::from_slice(tag),
        )
        .map_err(|_| SecurityFailure::AuthenticationFailure)?;

    Ok(buffer)
}
