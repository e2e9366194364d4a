//! `aesgcm-conformance`: checks [`aesgcm::AesGcmCipher`] against a
//! Wycheproof-format vector file.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the tracing subscriber.
//! 3. Load the vector corpus.
//! 4. Decrypt every applicable vector and compare with its verdict.
//! 5. Exit non-zero if any vector failed.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use tracing::{error, info};

use aesgcm::vectors::{self, VectorFile};
use config::Config;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        vectors_path = %cfg.vectors_path,
        aad_supported = cfg.aad_supported,
        "aesgcm-conformance starting"
    );

    // -----------------------------------------------------------------------
    // 3. Corpus
    // -----------------------------------------------------------------------
    let corpus = VectorFile::load(&cfg.vectors_path)
        .with_context(|| format!("failed to load vectors from {}", cfg.vectors_path))?;
    info!(
        algorithm = %corpus.algorithm,
        groups = corpus.test_groups.len(),
        "vector corpus loaded"
    );

    // -----------------------------------------------------------------------
    // 4. Run
    // -----------------------------------------------------------------------
    let report = vectors::run_corpus(corpus.cases(), cfg.capabilities());

    // -----------------------------------------------------------------------
    // 5. Verdict
    // -----------------------------------------------------------------------
    if !report.all_passed() {
        for failure in &report.failures {
            error!(%failure, "vector failed");
        }
        anyhow::bail!("{} of {} vectors failed", report.failed, report.total);
    }

    info!(passed = report.passed, skipped = report.skipped, "all vectors passed");
    Ok(())
}
