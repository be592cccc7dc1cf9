//! Configuration management for the object community analyzer

use crate::error::AnalysisError;

/// Analysis parameters for graph construction and the threshold sweep
#[derive(Debug, Clone)]
pub struct Config {
    /// Convex-combination weight for the structural metric (the event
    /// co-participation metric gets `1 - alpha`)
    pub alpha: f64,

    /// Lower bound of the threshold sweep (inclusive)
    pub min_threshold: f64,

    /// Upper bound of the threshold sweep (inclusive)
    pub max_threshold: f64,

    /// Step between consecutive sweep thresholds
    pub threshold_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            min_threshold: 0.01,
            max_threshold: 0.99,
            threshold_step: 0.01,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(alpha: f64, min_threshold: f64, max_threshold: f64, threshold_step: f64) -> Self {
        Self {
            alpha,
            min_threshold,
            max_threshold,
            threshold_step,
        }
    }

    /// Reject invalid parameters before any computation starts
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(AnalysisError::InvalidAlpha(self.alpha));
        }
        if self.threshold_step <= 0.0 {
            return Err(AnalysisError::InvalidStep(self.threshold_step));
        }
        if self.min_threshold <= 0.0
            || self.max_threshold > 1.0
            || self.min_threshold > self.max_threshold
        {
            return Err(AnalysisError::InvalidThresholdRange {
                min: self.min_threshold,
                max: self.max_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let config = Config::new(1.5, 0.01, 0.99, 0.01);
        assert_eq!(config.validate(), Err(AnalysisError::InvalidAlpha(1.5)));
    }

    #[test]
    fn rejects_inverted_threshold_range() {
        let config = Config::new(0.5, 0.8, 0.2, 0.01);
        assert_eq!(
            config.validate(),
            Err(AnalysisError::InvalidThresholdRange { min: 0.8, max: 0.2 })
        );
    }

    #[test]
    fn rejects_non_positive_step() {
        let config = Config::new(0.5, 0.01, 0.99, 0.0);
        assert_eq!(config.validate(), Err(AnalysisError::InvalidStep(0.0)));
    }
}
