//! Reply composer configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::DEFAULT_INTENSITY_THRESHOLD;

/// Composer tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    /// Intensity score above which the emphasis sentence is added
    #[serde(default = "default_intensity_threshold")]
    pub intensity_threshold: f64,

    /// Per-user history bound. Unbounded when unset.
    pub max_turns_per_user: Option<usize>,

    /// Fixed seed for template selection, for reproducible runs
    pub rng_seed: Option<u64>,
}

impl ComposerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.intensity_threshold) {
            return Err(ValidationError::InvalidIntensityThreshold);
        }
        if self.max_turns_per_user == Some(0) {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            intensity_threshold: default_intensity_threshold(),
            max_turns_per_user: None,
            rng_seed: None,
        }
    }
}

fn default_intensity_threshold() -> f64 {
    DEFAULT_INTENSITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ComposerConfig::default();
        assert_eq!(config.intensity_threshold, 0.7);
        assert!(config.max_turns_per_user.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let config = ComposerConfig {
                intensity_threshold: threshold,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidIntensityThreshold)
            );
        }
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let config = ComposerConfig {
            max_turns_per_user: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHistoryLimit));
    }
}
