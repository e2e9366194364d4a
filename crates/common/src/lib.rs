//! Error taxonomy and ciphertext envelope framing shared across the AES-GCM crates.

pub mod envelope;
pub mod error;

pub use envelope::{Envelope, Nonce, Tag, NONCE_LEN, OVERHEAD, TAG_LEN};
pub use error::{GcmError, SecurityFailure};
