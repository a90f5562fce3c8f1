//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Classify messages that arrive without an emotion label
    #[serde(default = "default_auto_classify_emotion")]
    pub auto_classify_emotion: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            auto_classify_emotion: default_auto_classify_emotion(),
            verbose_errors: false,
        }
    }
}

fn default_auto_classify_emotion() -> bool {
    true
}
