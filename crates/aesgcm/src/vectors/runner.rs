//! Runs known-answer vectors through [`AesGcmCipher::decrypt`].

use common::{NONCE_LEN, TAG_LEN};
use tracing::{debug, info, warn};

use super::{VectorCase, Verdict};
use crate::crypto::{AesGcmCipher, KeySize};
use crate::platform::Capabilities;

/// Result of checking a single vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cipher behaved as the verdict requires.
    Pass,
    /// The cipher misbehaved; the message says how.
    Fail(String),
    /// The vector does not apply to this cipher or host.
    Skip,
}

/// Aggregate results of a corpus run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failures: Vec<String>,
}

impl ConformanceReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if no vector failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Skip => self.skipped += 1,
            Outcome::Fail(message) => {
                self.failed += 1;
                self.failures.push(message);
            }
        }
    }
}

/// The verdict this cipher must reach, which is stricter than the corpus for
/// parameters it does not support: anything other than a 96-bit nonce and a
/// full 128-bit tag has to be rejected.
fn effective_verdict(case: &VectorCase) -> Verdict {
    if case.iv.len() != NONCE_LEN || case.tag.len() != TAG_LEN {
        Verdict::Invalid
    } else {
        case.result
    }
}

/// Check one vector against a cipher built from its key.
pub fn check_case(case: &VectorCase, capabilities: Capabilities) -> Outcome {
    if KeySize::from_len(case.key.len()).is_err() || !capabilities.permits(&case.aad) {
        return Outcome::Skip;
    }
    let cipher = match AesGcmCipher::new(&case.key) {
        Ok(c) => c.with_capabilities(capabilities),
        Err(_) => return Outcome::Skip,
    };

    let ciphertext = [case.iv.as_slice(), case.ct.as_slice(), case.tag.as_slice()].concat();
    let decrypted = cipher.decrypt(Some(&ciphertext), Some(&case.aad));
    let tc = format!("testcase {} ({})", case.tc_id, case.comment);

    match (effective_verdict(case), decrypted) {
        (Verdict::Invalid, Ok(_)) => Outcome::Fail(format!("{tc}: accepted invalid ciphertext")),
        (Verdict::Invalid, Err(e)) if e.is_security_failure() => Outcome::Pass,
        (Verdict::Invalid, Err(e)) => {
            Outcome::Fail(format!("{tc}: rejected with a non-security error: {e}"))
        }
        (_, Ok(plaintext)) if plaintext != case.msg => Outcome::Fail(format!(
            "{tc}: incorrect decryption, result: {}, expected: {}",
            hex::encode(&plaintext),
            hex::encode(&case.msg)
        )),
        (_, Ok(_)) => Outcome::Pass,
        (Verdict::Valid, Err(e)) => Outcome::Fail(format!("{tc}: cannot decrypt: {e}")),
        (Verdict::Acceptable, Err(_)) => Outcome::Pass,
    }
}

/// Check every vector and tally the outcomes.
pub fn run_corpus<'a>(
    cases: impl IntoIterator<Item = &'a VectorCase>,
    capabilities: Capabilities,
) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for case in cases {
        let outcome = check_case(case, capabilities);
        match &outcome {
            Outcome::Fail(message) => warn!(tc_id = case.tc_id, "{message}"),
            Outcome::Skip => debug!(tc_id = case.tc_id, key_len = case.key.len(), "vector skipped"),
            Outcome::Pass => {}
        }
        report.record(outcome);
    }
    info!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        skipped = report.skipped,
        "vector corpus checked"
    );
    report
}
