//! Lexicon Emotion Classifier
//!
//! Offline classifier that counts emotion keywords in the text and
//! normalizes the counts into a distribution over the five labels.
//! Stands in for a trained model; swap in another `EmotionClassifier`
//! adapter to use one.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::conversation::Emotion;
use crate::ports::{ClassificationError, EmotionClassifier, EmotionDistribution};

const SADNESS_WORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "lonely", "alone", "cry", "crying", "grief", "lost",
    "losing", "miss", "hopeless", "heartbroken", "down", "upset", "hurt",
];

const JOY_WORDS: &[&str] = &[
    "happy", "glad", "joy", "excited", "great", "wonderful", "love", "amazing", "proud",
    "grateful", "thrilled", "delighted", "fantastic", "celebrate",
];

const ANGER_WORDS: &[&str] = &[
    "angry", "mad", "furious", "annoyed", "hate", "irritated", "frustrated", "rage",
    "unfair", "outraged", "resent",
];

const FEAR_WORDS: &[&str] = &[
    "afraid", "scared", "fear", "anxious", "worried", "nervous", "terrified", "panic",
    "dread", "frightened", "uneasy",
];

const SURPRISE_WORDS: &[&str] = &[
    "surprised", "shocked", "unexpected", "suddenly", "amazed", "astonished", "wow",
    "unbelievable", "stunned",
];

/// Keyword-count emotion classifier.
#[derive(Debug, Clone)]
pub struct LexiconEmotionClassifier {
    lexicon: HashMap<&'static str, Emotion>,
}

impl Default for LexiconEmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconEmotionClassifier {
    pub fn new() -> Self {
        let tables = [
            (Emotion::Sadness, SADNESS_WORDS),
            (Emotion::Joy, JOY_WORDS),
            (Emotion::Anger, ANGER_WORDS),
            (Emotion::Fear, FEAR_WORDS),
            (Emotion::Surprise, SURPRISE_WORDS),
        ];

        let lexicon = tables
            .iter()
            .flat_map(|(emotion, words)| words.iter().map(move |word| (*word, *emotion)))
            .collect();

        Self { lexicon }
    }

    fn count_hits(&self, text: &str) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for token in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|token| !token.is_empty())
        {
            if let Some(emotion) = self.lexicon.get(token.to_lowercase().as_str()) {
                counts[index_of(*emotion)] += 1;
            }
        }
        counts
    }
}

fn index_of(emotion: Emotion) -> usize {
    Emotion::ALL
        .iter()
        .position(|candidate| *candidate == emotion)
        .unwrap_or(0)
}

#[async_trait]
impl EmotionClassifier for LexiconEmotionClassifier {
    async fn classify(&self, text: &str) -> Result<EmotionDistribution, ClassificationError> {
        if text.trim().is_empty() {
            return Err(ClassificationError::EmptyInput);
        }

        let counts = self.count_hits(text);
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(ClassificationError::Ambiguous);
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        if counts.iter().filter(|count| **count == max).count() > 1 {
            return Err(ClassificationError::Ambiguous);
        }

        Ok(EmotionDistribution::new(
            Emotion::ALL
                .iter()
                .zip(counts)
                .map(|(emotion, count)| (emotion.as_str(), count as f64 / total as f64)),
        ))
    }
}
