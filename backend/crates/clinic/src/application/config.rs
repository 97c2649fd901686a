//! Application Configuration
//!
//! Configuration for the Clinic application layer.

/// Re-export KeyLayout from infra
pub use crate::infra::keys::KeyLayout;

/// Clinic application configuration
#[derive(Debug, Clone, Default)]
pub struct ClinicConfig {
    /// How record ids map to ledger keys
    pub key_layout: KeyLayout,
}

impl ClinicConfig {
    /// Config reading and writing records under their raw ids, as existing
    /// deployments do
    pub fn legacy() -> Self {
        Self {
            key_layout: KeyLayout::Legacy,
        }
    }
}
