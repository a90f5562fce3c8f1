//! Emotional intensity estimation.

use rand::{Rng, RngCore};

/// Default score above which a reply acknowledges the message's importance.
pub const DEFAULT_INTENSITY_THRESHOLD: f64 = 0.7;

/// Estimates how emotionally charged a message is.
///
/// Implementations return a score in `[0, 1)`. `rng` is the composer's
/// random source, so seeded composers stay reproducible.
pub trait IntensityEstimator: Send + Sync {
    fn estimate(&self, text: &str, rng: &mut dyn RngCore) -> f64;
}

/// Placeholder estimator drawing a uniform score for every message.
///
/// Stands in until a real sentiment model is wired up through the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIntensityEstimator;

impl IntensityEstimator for RandomIntensityEstimator {
    fn estimate(&self, _text: &str, rng: &mut dyn RngCore) -> f64 {
        rng.gen::<f64>()
    }
}

/// Estimator returning the same score for every message.
#[derive(Debug, Clone, Copy)]
pub struct FixedIntensityEstimator(pub f64);

impl IntensityEstimator for FixedIntensityEstimator {
    fn estimate(&self, _text: &str, _rng: &mut dyn RngCore) -> f64 {
        self.0
    }
}
