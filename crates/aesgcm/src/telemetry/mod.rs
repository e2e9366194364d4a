//! Structured logging for the conformance runner.
//!
//! # Telemetry invariants
//!
//! - **No key material, nonces, plaintext, or associated data** may appear
//!   in any span field or log event. Only lengths and verdicts are recorded.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) and can be
//!   overridden with `RUST_LOG`.

pub mod init;

pub use init::init_telemetry;
