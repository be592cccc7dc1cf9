//! Domain error types for the analyzer

use thiserror::Error;

/// Errors raised by configuration validation and the threshold search
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Combination weight alpha must be a convex-combination coefficient
    #[error("alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),

    /// Threshold bounds must satisfy 0 < min <= max <= 1
    #[error("invalid threshold range: min {min}, max {max} (expected 0 < min <= max <= 1)")]
    InvalidThresholdRange { min: f64, max: f64 },

    /// Sweep step must be strictly positive
    #[error("threshold step must be positive, got {0}")]
    InvalidStep(f64),

    /// The configured sweep bounds produced no thresholds to evaluate
    #[error("threshold grid is empty")]
    EmptyThresholdGrid,

    /// No threshold in the sweep produced a multi-node community with a
    /// computable conductance
    #[error("no qualifying threshold found: no multi-node community had a computable conductance")]
    NoQualifyingThreshold,
}
