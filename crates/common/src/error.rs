//! Error taxonomy shared by every AES-GCM operation.

use thiserror::Error;

/// Any condition under which a ciphertext cannot be verified or produced.
///
/// Callers must treat every variant the same way: reject the input and never
/// trust any output. The variants exist for diagnostics only; the umbrella
/// check is [`GcmError::is_security_failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SecurityFailure {
    /// The ciphertext is too short to hold a nonce and a tag.
    #[error("ciphertext rejected: invalid ciphertext")]
    InvalidCiphertext,

    /// Tag verification failed: wrong key, altered bytes, or mismatched AAD.
    #[error("ciphertext rejected: authentication failed")]
    AuthenticationFailure,

    /// The underlying AEAD primitive refused to seal.
    #[error("aead primitive failure")]
    PrimitiveFailure,

    /// The secure random source could not produce a nonce.
    #[error("secure random source failure")]
    RandomSourceFailure,
}

/// Top-level error type for cipher construction, encryption, and decryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GcmError {
    /// The key is neither 16 nor 32 bytes long.
    #[error("invalid key size: {0} bytes (expected 16 or 32)")]
    InvalidKeySize(usize),

    /// A required byte sequence was absent.
    #[error("{0} must not be null")]
    NullInput(&'static str),

    /// The host cannot perform the requested operation (non-empty AAD on a
    /// platform whose GCM implementation does not accept it).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The ciphertext could not be produced or authenticated.
    #[error(transparent)]
    Security(#[from] SecurityFailure),
}

impl GcmError {
    /// Returns `true` for every failure that means "reject this ciphertext".
    pub fn is_security_failure(&self) -> bool {
        matches!(self, GcmError::Security(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_failures_share_the_umbrella() {
        for failure in [
            SecurityFailure::InvalidCiphertext,
            SecurityFailure::AuthenticationFailure,
            SecurityFailure::PrimitiveFailure,
            SecurityFailure::RandomSourceFailure,
        ] {
            assert!(GcmError::from(failure).is_security_failure());
        }
    }

    #[test]
    fn caller_errors_are_not_security_failures() {
        assert!(!GcmError::InvalidKeySize(24).is_security_failure());
        assert!(!GcmError::NullInput("plaintext").is_security_failure());
        assert!(!GcmError::UnsupportedOperation("aad").is_security_failure());
    }

    #[test]
    fn display_includes_context() {
        assert!(GcmError::InvalidKeySize(24).to_string().contains("24 bytes"));
        assert_eq!(
            GcmError::NullInput("ciphertext").to_string(),
            "ciphertext must not be null"
        );
    }

    #[test]
    fn rejection_messages_share_a_prefix() {
        let short = GcmError::from(SecurityFailure::InvalidCiphertext).to_string();
        let bad_tag = GcmError::from(SecurityFailure::AuthenticationFailure).to_string();
        assert!(short.starts_with("ciphertext rejected"));
        assert!(bad_tag.starts_with("ciphertext rejected"));
    }
}
