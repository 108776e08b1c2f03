//! Snapshot configuration.

use std::error::Error;
use std::fmt;

/// Role attribute value that marks the ego vehicle by default.
pub const DEFAULT_HERO_ROLE: &str = "hero";

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SnapshotConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `hero_role_name` is empty, which would match unnamed vehicles.
    EmptyHeroRole,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeroRole => write!(f, "hero_role_name must not be empty"),
        }
    }
}

impl Error for ConfigError {}

// ── SnapshotConfig ─────────────────────────────────────────────────

/// Knobs for [`SnapshotExporter`](crate::SnapshotExporter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// `role_name` attribute value of hero candidates.
    pub hero_role_name: String,
    /// Seed for the hero choice when several vehicles qualify.
    pub seed: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            hero_role_name: DEFAULT_HERO_ROLE.to_owned(),
            seed: 0,
        }
    }
}

impl SnapshotConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_role_name.is_empty() {
            return Err(ConfigError::EmptyHeroRole);
        }
        Ok(())
    }
}
