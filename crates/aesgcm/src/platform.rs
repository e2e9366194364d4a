//! Host capability flags injected into the cipher at construction.
//!
//! Some legacy hosts ship a GCM implementation that cannot process associated
//! data. The cipher never probes the runtime itself; whoever builds it states
//! what the host supports.

/// What the host's GCM implementation is able to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    aad_with_gcm: bool,
}

impl Capabilities {
    /// A host with full GCM support, including associated data.
    pub const fn full() -> Self {
        Self { aad_with_gcm: true }
    }

    /// A legacy host that rejects non-empty associated data.
    pub const fn without_aad() -> Self {
        Self {
            aad_with_gcm: false,
        }
    }

    /// Whether non-empty associated data may be fed to GCM on this host.
    pub const fn supports_aad_with_gcm(&self) -> bool {
        self.aad_with_gcm
    }

    /// Whether an operation over `aad` is permitted on this host.
    pub fn permits(&self, aad: &[u8]) -> bool {
        self.aad_with_gcm || aad.is_empty()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
