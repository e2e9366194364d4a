//! AES-GCM authenticated encryption with random nonces and envelope framing.
//!
//! Every call to [`AesGcmCipher::encrypt`] draws a fresh 96-bit nonce from the
//! secure random source and emits `nonce || body || tag`. Nonces are never
//! derived from a counter or reused, so one key may encrypt many messages as
//! long as the total stays within the random-nonce collision bound.
//!
//! **Do NOT feed caller-chosen nonces through this type.** GCM nonce reuse
//! under one key breaks both confidentiality and authentication.

use common::{envelope, Envelope, GcmError, Nonce, SecurityFailure, NONCE_LEN};
use tracing::{debug, instrument};
use zeroize::Zeroize;

use super::primitive::{BlockCipherAead, RustCryptoGcm};
use super::random::{OsRandom, SecureRandom};
use super::{normalize_aad, Aead};
use crate::platform::Capabilities;

/// Byte length of an AES-128 key.
pub const AES_128_KEY_LEN: usize = 16;

/// Byte length of an AES-256 key.
pub const AES_256_KEY_LEN: usize = 32;

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key.
    Aes128,
    /// 256-bit key.
    Aes256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            KeySize::Aes128 => AES_128_KEY_LEN,
            KeySize::Aes256 => AES_256_KEY_LEN,
        }
    }

    /// Map a byte length to a key size.
    ///
    /// # Errors
    ///
    /// Returns [`GcmError::InvalidKeySize`] for anything but 16 or 32.
    pub fn from_len(len: usize) -> Result<Self, GcmError> {
        match len {
            AES_128_KEY_LEN => Ok(KeySize::Aes128),
            AES_256_KEY_LEN => Ok(KeySize::Aes256),
            other => Err(GcmError::InvalidKeySize(other)),
        }
    }
}

/// Owned key material, overwritten with zeroes when dropped.
pub struct CipherKey(Box<[u8]>);

impl CipherKey {
    fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec().into_boxed_slice())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for CipherKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherKey([REDACTED])")
    }
}

/// Generate a random AES key of the given size from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`SecurityFailure::RandomSourceFailure`] if the OS source fails.
pub fn generate_key(size: KeySize) -> Result<Vec<u8>, GcmError> {
    let mut key = vec![0u8; size.byte_len()];
    OsRandom.fill(&mut key)?;
    Ok(key)
}

/// AES-GCM cipher bound to a single key.
///
/// Stateless after construction: the key never changes and calls share no
/// mutable state, so one instance may serve any number of threads when its
/// primitive and random source are `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use aesgcm::AesGcmCipher;
///
/// let cipher = AesGcmCipher::new(&[0x42u8; 16]).unwrap();
/// let ct = cipher.encrypt(Some(b"secret"), Some(b"header")).unwrap();
/// assert_eq!(ct.len(), 6 + 28);
/// let pt = cipher.decrypt(Some(&ct), Some(b"header")).unwrap();
/// assert_eq!(pt, b"secret");
/// ```
#[derive(Debug)]
pub struct AesGcmCipher<P = RustCryptoGcm, R = OsRandom> {
    key: CipherKey,
    key_size: KeySize,
    primitive: P,
    random: R,
    capabilities: Capabilities,
}

impl AesGcmCipher {
    /// Build a cipher backed by RustCrypto AES-GCM and the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`GcmError::InvalidKeySize`] unless `key` is 16 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, GcmError> {
        Self::with_parts(key, RustCryptoGcm, OsRandom)
    }
}

impl<P: BlockCipherAead, R: SecureRandom> AesGcmCipher<P, R> {
    /// Build a cipher from explicit collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`GcmError::InvalidKeySize`] unless `key` is 16 or 32 bytes.
    pub fn with_parts(key: &[u8], primitive: P, random: R) -> Result<Self, GcmError> {
        let key_size = KeySize::from_len(key.len())?;
        Ok(Self {
            key: CipherKey::new(key),
            key_size,
            primitive,
            random,
            capabilities: Capabilities::default(),
        })
    }

    /// Replace the host capabilities this cipher enforces.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Size of the bound key.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Encrypt `plaintext`, authenticating `aad` alongside it.
    ///
    /// Returns `nonce || body || tag`, exactly `plaintext.len() + 28` bytes.
    /// An absent `aad` is the same as an empty one.
    ///
    /// # Errors
    ///
    /// - [`GcmError::NullInput`] if `plaintext` is `None`.
    /// - [`GcmError::UnsupportedOperation`] for non-empty `aad` on a host
    ///   without AAD support.
    /// - [`GcmError::Security`] if the random source or primitive fails.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            key_size = ?self.key_size,
            plaintext_len = plaintext.map(<[u8]>::len),
            aad_len = aad.map(<[u8]>::len),
        )
    )]
    pub fn encrypt(
        &self,
        plaintext: Option<&[u8]>,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>, GcmError> {
        let plaintext = plaintext.ok_or(GcmError::NullInput("plaintext"))?;
        let aad = self.checked_aad(aad)?;

        let mut nonce: Nonce = [0u8; NONCE_LEN];
        self.random.fill(&mut nonce)?;

        let (body, tag) = self
            .primitive
            .seal(self.key.as_bytes(), &nonce, plaintext, aad)?;
        if body.len() != plaintext.len() {
            return Err(SecurityFailure::PrimitiveFailure.into());
        }

        Ok(envelope::assemble(&nonce, &body, &tag))
    }

    /// Verify and decrypt a `nonce || body || tag` envelope.
    ///
    /// An absent `aad` is the same as an empty one, whichever form was used
    /// at encryption time. No plaintext is released unless the tag verifies.
    ///
    /// # Errors
    ///
    /// - [`GcmError::NullInput`] if `ciphertext` is `None`.
    /// - [`GcmError::UnsupportedOperation`] for non-empty `aad` on a host
    ///   without AAD support.
    /// - [`GcmError::Security`] if the ciphertext is shorter than 28 bytes,
    ///   any byte of it was altered, or `aad` does not match.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            key_size = ?self.key_size,
            ciphertext_len = ciphertext.map(<[u8]>::len),
            aad_len = aad.map(<[u8]>::len),
        )
    )]
    pub fn decrypt(
        &self,
        ciphertext: Option<&[u8]>,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>, GcmError> {
        let ciphertext = ciphertext.ok_or(GcmError::NullInput("ciphertext"))?;
        let aad = self.checked_aad(aad)?;

        let env = Envelope::parse(ciphertext).map_err(|e| {
            debug!("ciphertext shorter than nonce and tag");
            e
        })?;

        let plaintext = self
            .primitive
            .open(self.key.as_bytes(), env.nonce, env.body, env.tag, aad)
            .map_err(|e| {
                debug!("tag verification failed");
                e
            })?;

        Ok(plaintext)
    }

    fn checked_aad<'a>(&self, aad: Option<&'a [u8]>) -> Result<&'a [u8], GcmError> {
        let aad = normalize_aad(aad);
        if !self.capabilities.permits(aad) {
            return Err(GcmError::UnsupportedOperation(
                "associated data is not supported by this host's AES-GCM",
            ));
        }
        Ok(aad)
    }
}

impl<P: BlockCipherAead, R: SecureRandom> Aead for AesGcmCipher<P, R> {
    fn encrypt(&self, plaintext: Option<&[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>, GcmError> {
        AesGcmCipher::<P, R>::encrypt(self, plaintext, aad)
    }

    fn decrypt(&self, ciphertext: Option<&[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>, GcmError> {
        AesGcmCipher::<P, R>::decrypt(self, ciphertext, aad)
    }
}
