//! Emotion vocabulary understood by the composer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotions with dedicated reply templates.
///
/// Any other label (including "neutral" or an empty string) is treated as
/// generic and answered from the fallback templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sadness,
    Joy,
    Anger,
    Fear,
    Surprise,
}

impl Emotion {
    /// All recognized emotions, in label order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Sadness,
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
    ];

    /// Parses a free-form label. Matching ignores case and surrounding
    /// whitespace; unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(label))
    }

    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Sadness => "sadness",
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
