//! Known-answer test vectors in the Wycheproof AEAD JSON format.
//!
//! A corpus file looks like:
//!
//! ```text
//! { "algorithm": "AES-GCM",
//!   "testGroups": [ { "ivSize": 96, "keySize": 128, "tagSize": 128,
//!     "tests": [ { "tcId": 1, "comment": "", "key": "<hex>", "iv": "<hex>",
//!                  "aad": "<hex>", "msg": "<hex>", "ct": "<hex>",
//!                  "tag": "<hex>", "result": "valid" } ] } ] }
//! ```
//!
//! Unknown fields (`flags`, `notes`, `schema`, ...) are ignored.

pub mod runner;

pub use runner::{check_case, run_corpus, ConformanceReport, Outcome};

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a vector corpus.
#[derive(Debug, Error)]
pub enum VectorError {
    /// The corpus file could not be read.
    #[error("failed to read vector file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The corpus is not valid Wycheproof-format JSON.
    #[error("invalid vector file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Expected verdict for a single vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Plaintext, ciphertext, and tag match; decryption must succeed.
    Valid,
    /// Decryption must fail.
    Invalid,
    /// Weak parameters or legacy format; either outcome is tolerated.
    Acceptable,
}

/// One (key, nonce, plaintext, aad, ciphertext, tag, verdict) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorCase {
    pub tc_id: usize,
    #[serde(default)]
    pub comment: String,
    #[serde(deserialize_with = "hex::deserialize")]
    pub key: Vec<u8>,
    #[serde(deserialize_with = "hex::deserialize")]
    pub iv: Vec<u8>,
    #[serde(deserialize_with = "hex::deserialize")]
    pub aad: Vec<u8>,
    #[serde(deserialize_with = "hex::deserialize")]
    pub msg: Vec<u8>,
    #[serde(deserialize_with = "hex::deserialize")]
    pub ct: Vec<u8>,
    #[serde(deserialize_with = "hex::deserialize")]
    pub tag: Vec<u8>,
    pub result: Verdict,
}

/// Vectors sharing key, nonce, and tag sizes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    /// Key size in bits.
    #[serde(default)]
    pub key_size: usize,
    /// Nonce size in bits.
    #[serde(default)]
    pub iv_size: usize,
    /// Tag size in bits.
    #[serde(default)]
    pub tag_size: usize,
    pub tests: Vec<VectorCase>,
}

/// A whole corpus file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorFile {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub number_of_tests: usize,
    pub test_groups: Vec<TestGroup>,
}

impl VectorFile {
    /// Parse a corpus from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Parse`] on malformed JSON, bad hex, or an
    /// unknown verdict.
    pub fn from_json(json: &str) -> Result<Self, VectorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a corpus file.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Io`] if the file cannot be read, or
    /// [`VectorError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VectorError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every vector in every group, in file order.
    pub fn cases(&self) -> impl Iterator<Item = &VectorCase> {
        self.test_groups.iter().flat_map(|g| g.tests.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
      "algorithm": "AES-GCM",
      "numberOfTests": 2,
      "testGroups": [{
        "ivSize": 96, "keySize": 128, "tagSize": 128, "type": "AeadTest",
        "tests": [
          { "tcId": 1, "comment": "zero block", "flags": [],
            "key": "00000000000000000000000000000000",
            "iv": "000000000000000000000000",
            "aad": "", "msg": "00000000000000000000000000000000",
            "ct": "0388dace60b6a392f328c2b971b2fe78",
            "tag": "ab6e47d42cec13bdf53a67b21257bddf",
            "result": "valid" },
          { "tcId": 2, "comment": "flipped tag",
            "key": "00000000000000000000000000000000",
            "iv": "000000000000000000000000",
            "aad": "", "msg": "00000000000000000000000000000000",
            "ct": "0388dace60b6a392f328c2b971b2fe78",
            "tag": "ab6e47d42cec13bdf53a67b21257bdde",
            "result": "invalid" }
        ]
      }]
    }"#;

    #[test]
    fn parses_wycheproof_layout() {
        let file = VectorFile::from_json(SAMPLE).unwrap();
        assert_eq!(file.algorithm, "AES-GCM");
        assert_eq!(file.number_of_tests, 2);
        assert_eq!(file.test_groups[0].iv_size, 96);

        let cases: Vec<_> = file.cases().collect();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].tc_id, 1);
        assert_eq!(cases[0].comment, "zero block");
        assert_eq!(cases[0].key, vec![0u8; 16]);
        assert!(cases[0].aad.is_empty());
        assert_eq!(cases[0].result, Verdict::Valid);
        assert_eq!(cases[1].result, Verdict::Invalid);
    }

    #[test]
    fn rejects_bad_hex() {
        let json = SAMPLE.replace("0388dace", "zz88dace");
        assert!(matches!(
            VectorFile::from_json(&json),
            Err(VectorError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_verdict() {
        let json = SAMPLE.replace("\"invalid\"", "\"maybe\"");
        assert!(VectorFile::from_json(&json).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = VectorFile::load("/nonexistent/aes_gcm_test.json").unwrap_err();
        assert!(matches!(err, VectorError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/aes_gcm_test.json"));
    }
}
