//! Emotion classifier adapters.

mod lexicon_classifier;

pub use lexicon_classifier::LexiconEmotionClassifier;
