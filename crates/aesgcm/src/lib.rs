//! AES-GCM authenticated encryption with associated data.
//!
//! [`AesGcmCipher`] exposes two operations over an owned 128- or 256-bit key:
//! `encrypt(plaintext, aad)` producing `nonce || body || tag`, and
//! `decrypt(ciphertext, aad)` returning the plaintext or a
//! [`SecurityFailure`]. The [`vectors`] module checks the cipher against
//! Wycheproof-format known-answer corpora.

pub mod crypto;
pub mod platform;
pub mod vectors;

pub use common::{Envelope, GcmError, SecurityFailure, NONCE_LEN, OVERHEAD, TAG_LEN};
pub use crypto::{generate_key, Aead, AesGcmCipher, KeySize};
pub use platform::Capabilities;
