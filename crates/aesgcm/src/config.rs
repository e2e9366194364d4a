//! Configuration loading and validation for the conformance runner.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

use aesgcm::Capabilities;

/// Validated conformance runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to a Wycheproof-format AES-GCM vector file. **Required.**
    pub vectors_path: String,

    /// Whether this host's AES-GCM accepts associated data. Vectors with
    /// non-empty AAD are skipped when `false`.
    #[serde(default = "default_aad_supported")]
    pub aad_supported: bool,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_aad_supported() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Host capabilities implied by this configuration.
    pub fn capabilities(&self) -> Capabilities {
        if self.aad_supported {
            Capabilities::full()
        } else {
            Capabilities::without_aad()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.vectors_path.trim().is_empty() {
            anyhow::bail!("VECTORS_PATH is required and must not be empty");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty when set");
        }
        Ok(())
    }
}
