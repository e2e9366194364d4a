//! Secure random byte source used for nonces.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use common::SecurityFailure;

/// Source of cryptographically secure, uniformly random bytes.
///
/// Successive calls must be independent. Implementations are shared between
/// threads, so any internal synchronisation is their own business.
#[cfg_attr(test, mockall::automock)]
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityFailure::RandomSourceFailure`] if the source cannot
    /// produce bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), SecurityFailure>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SecurityFailure> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| SecurityFailure::RandomSourceFailure)
    }
}
