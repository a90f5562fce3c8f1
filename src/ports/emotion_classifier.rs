//! Emotion classification port.
//!
//! Classifiers map free text to a probability distribution over emotion
//! labels. The composer only ever consumes the single most likely label.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for classifying the emotion expressed in a message.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Returns a probability distribution over the classifier's labels.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` when there is nothing to classify
    /// - `Ambiguous` when no label clearly dominates
    /// - `Unavailable` when the backing model cannot be reached
    async fn classify(&self, text: &str) -> Result<EmotionDistribution, ClassificationError>;
}

/// One label with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub probability: f64,
}

/// Probability distribution over emotion labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionDistribution {
    scores: Vec<LabelScore>,
}

impl EmotionDistribution {
    /// Creates a distribution from `(label, probability)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(label, probability)| LabelScore {
                    label: label.into(),
                    probability,
                })
                .collect(),
        }
    }

    /// All label scores, in the order the classifier produced them.
    pub fn scores(&self) -> &[LabelScore] {
        &self.scores
    }

    /// The highest-probability label. Ties resolve to the earliest label.
    pub fn top_label(&self) -> Option<&str> {
        self.scores
            .iter()
            .fold(None::<&LabelScore>, |best, score| match best {
                Some(best) if best.probability >= score.probability => Some(best),
                _ => Some(score),
            })
            .map(|score| score.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Errors reported by emotion classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("no text to classify")]
    EmptyInput,

    #[error("no emotion clearly dominates")]
    Ambiguous,

    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
