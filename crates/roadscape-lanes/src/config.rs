//! Graph build configuration, validation, and error types.
//!
//! [`GraphConfig`] is the input for [`LaneGraphBuilder`](crate::LaneGraphBuilder).
//! [`validate()`](GraphConfig::validate) checks it once, before any map
//! query is made.

use std::error::Error;
use std::fmt;

// ── NeighbourMatching ──────────────────────────────────────────────

/// How a waypoint is paired with a waypoint in an adjacent lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighbourMatching {
    /// Pair by position in the sampled sequence: element `i` of this lane
    /// with element `i` of the neighbour lane.
    ///
    /// Lanes of one road are sampled with the same step from matching
    /// seeds, so equal indices are usually side by side. Near the end of
    /// lanes of different length the pairing drifts or runs out.
    #[default]
    Index,
    /// Pair with the geometrically closest waypoint of the neighbour lane.
    ///
    /// Quadratic in lane length. Produces different output from
    /// [`Index`](Self::Index) wherever the lanes are not aligned.
    Nearest,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GraphConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// precision is NaN, infinite, zero, or negative.
    InvalidPrecision {
        /// The invalid value.
        value: f64,
    },
    /// max_lane_samples is zero.
    ZeroSampleLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision { value } => {
                write!(f, "precision must be finite and positive, got {value}")
            }
            Self::ZeroSampleLimit => write!(f, "max_lane_samples must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── GraphConfig ────────────────────────────────────────────────────

/// Configuration for building a lane graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Sampling step along each lane, in metres. Default: 0.05.
    pub precision: f64,
    /// Cross-lane pairing strategy. Default: [`NeighbourMatching::Index`].
    pub neighbour_matching: NeighbourMatching,
    /// Upper bound on samples per lane. Default: 1 000 000.
    ///
    /// A lane that stays on its road past this many samples (a closed
    /// loop, a map service that never ends a road) aborts the build.
    pub max_lane_samples: usize,
}

impl GraphConfig {
    /// Default sampling step.
    pub const DEFAULT_PRECISION: f64 = 0.05;

    /// Default per-lane sample cap.
    pub const DEFAULT_MAX_LANE_SAMPLES: usize = 1_000_000;

    /// Validate all fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(ConfigError::InvalidPrecision {
                value: self.precision,
            });
        }
        if self.max_lane_samples == 0 {
            return Err(ConfigError::ZeroSampleLimit);
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            neighbour_matching: NeighbourMatching::Index,
            max_lane_samples: Self::DEFAULT_MAX_LANE_SAMPLES,
        }
    }
}
