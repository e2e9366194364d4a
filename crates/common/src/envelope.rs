//! Ciphertext envelope framing.
//!
//! # Wire format
//!
//! ```text
//! nonce (12 bytes) || encrypted plaintext (n bytes) || tag (16 bytes)
//! ```
//!
//! The envelope is an opaque byte string with no internal length fields, so a
//! ciphertext is always exactly `n + OVERHEAD` bytes.

use crate::error::SecurityFailure;

/// Byte length of an AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of a full AES-GCM authentication tag (128 bits).
pub const TAG_LEN: usize = 16;

/// Bytes added to every plaintext by encryption.
pub const OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// A 96-bit GCM nonce.
pub type Nonce = [u8; NONCE_LEN];

/// A full-length GCM authentication tag.
pub type Tag = [u8; TAG_LEN];

/// Borrowed view of a framed ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// Nonce the body was sealed under.
    pub nonce: &'a Nonce,
    /// Encrypted plaintext, same length as the plaintext.
    pub body: &'a [u8],
    /// Authentication tag over `body` and the associated data.
    pub tag: &'a Tag,
}

impl<'a> Envelope<'a> {
    /// Split a wire buffer into nonce, body, and tag.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityFailure::InvalidCiphertext`] if `bytes` is shorter
    /// than [`OVERHEAD`].
    pub fn parse(bytes: &'a [u8]) -> Result<Self, SecurityFailure> {
        if bytes.len() < OVERHEAD {
            return Err(SecurityFailure::InvalidCiphertext);
        }
        let (nonce, rest) = bytes.split_at(NONCE_LEN);
        let (body, tag) = rest.split_at(rest.len() - TAG_LEN);

        Ok(Self {
            nonce: nonce
                .try_into()
                .map_err(|_| SecurityFailure::InvalidCiphertext)?,
            body,
            tag: tag.try_into().map_err(|_| SecurityFailure::InvalidCiphertext)?,
        })
    }

    /// Length of the plaintext this envelope decrypts to.
    pub fn plaintext_len(&self) -> usize {
        self.body.len()
    }

    /// Encode this envelope back to its wire representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        assemble(self.nonce, self.body, self.tag)
    }
}

/// Concatenate `nonce || body || tag` into a freshly allocated buffer.
pub fn assemble(nonce: &Nonce, body: &[u8], tag: &Tag) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + OVERHEAD);
    out.extend_from_slice(nonce);
    out.extend_from_slice(body);
    out.extend_from_slice(tag);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overhead_is_nonce_plus_tag() {
        assert_eq!(OVERHEAD, 28);
    }

    #[test]
    fn assemble_orders_nonce_body_tag() {
        let nonce = [0x01u8; NONCE_LEN];
        let tag = [0x03u8; TAG_LEN];
        let out = assemble(&nonce, b"\x02\x02", &tag);
        assert_eq!(out.len(), 2 + OVERHEAD);
        assert_eq!(&out[..NONCE_LEN], &nonce);
        assert_eq!(&out[NONCE_LEN..NONCE_LEN + 2], b"\x02\x02");
        assert_eq!(&out[NONCE_LEN + 2..], &tag);
    }

    #[test]
    fn parse_splits_at_fixed_offsets() {
        let mut wire = vec![0xAAu8; NONCE_LEN];
        wire.extend_from_slice(b"body");
        wire.extend_from_slice(&[0xBBu8; TAG_LEN]);

        let env = Envelope::parse(&wire).unwrap();
        assert_eq!(env.nonce, &[0xAAu8; NONCE_LEN]);
        assert_eq!(env.body, b"body");
        assert_eq!(env.tag, &[0xBBu8; TAG_LEN]);
        assert_eq!(env.plaintext_len(), 4);
        assert_eq!(env.to_bytes(), wire);
    }

    #[test]
    fn parse_accepts_empty_body() {
        let wire = [0u8; OVERHEAD];
        let env = Envelope::parse(&wire).unwrap();
        assert!(env.body.is_empty());
    }

    #[test]
    fn parse_rejects_short_input() {
        for len in 0..OVERHEAD {
            let wire = vec![0u8; len];
            assert_eq!(
                Envelope::parse(&wire),
                Err(SecurityFailure::InvalidCiphertext),
                "length {len} must be rejected"
            );
        }
    }
}
