//! Reply templates for each emotion.
//!
//! Every emotion has the same shape: an optional opener plus three
//! alternatives for each randomized pipeline stage. Adding an emotion or a
//! translation is a data change here, not a change to the composer.
//!
//! Templates may contain a `{text}` placeholder which is replaced verbatim
//! with the user's message.

use super::emotion::Emotion;

/// Placeholder replaced with the user's message.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Template set for one emotion (or the generic fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTemplates {
    /// Opening sentence. `None` for the generic fallback.
    pub opener: Option<&'static str>,
    /// Emotion-specific elaborations, one is picked per reply.
    pub elaborations: [&'static str; 3],
    /// Coping actions completing "One thing that might help is to ...".
    pub coping_actions: [&'static str; 3],
    /// Follow-up questions that close the reply.
    pub follow_ups: [&'static str; 3],
}

/// Returns the templates for an emotion, or the generic fallback.
pub fn templates_for(emotion: Option<Emotion>) -> &'static ReplyTemplates {
    match emotion {
        Some(Emotion::Sadness) => &SADNESS,
        Some(Emotion::Joy) => &JOY,
        Some(Emotion::Anger) => &ANGER,
        Some(Emotion::Fear) => &FEAR,
        Some(Emotion::Surprise) => &SURPRISE,
        None => &GENERIC,
    }
}

/// Substitutes the user's message into a template.
pub fn render(template: &str, text: &str) -> String {
    template.replace(TEXT_PLACEHOLDER, text)
}

// ============================================================================
// Emotion tables
// ============================================================================

const SADNESS: ReplyTemplates = ReplyTemplates {
    opener: Some("I'm sorry to hear that you're feeling sad about '{text}'. "),
    elaborations: [
        "It's okay to feel sad about {text}. Sadness is a natural response to difficult situations. ",
        "I'm here to listen and support you through this sadness regarding {text}. ",
        "Feeling sad about {text} shows that you care deeply. It's a sign of your emotional depth. ",
    ],
    coping_actions: [
        "try taking a short walk in nature",
        "listen to uplifting music",
        "reach out to a friend for support",
    ],
    follow_ups: [
        "How long have you been feeling sad about {text}?",
        "Is there something specific about {text} that's particularly upsetting?",
        "Have you experienced similar feelings of sadness before?",
    ],
};

const JOY: ReplyTemplates = ReplyTemplates {
    opener: Some("It's amazing to hear that you're feeling joyful about '{text}'. "),
    elaborations: [
        "It's wonderful to hear that {text} is bringing you joy! These positive moments are worth cherishing. ",
        "Your happiness about {text} is truly heartwarming. It's great to see you experiencing such positive emotions. ",
        "The joy you're feeling about {text} is beautiful. It's moments like these that make life special. ",
    ],
    coping_actions: [
        "share your happiness with others",
        "practice gratitude by noting what you're thankful for",
        "engage in an activity that brings you more joy",
    ],
    follow_ups: [
        "What's the best part about {text} that's making you feel this way?",
        "How do you think you can maintain this positive feeling?",
        "Would you like to share this joy with someone special?",
    ],
};

const ANGER: ReplyTemplates = ReplyTemplates {
    opener: Some("I can understand why you're feeling angry about '{text}'. "),
    elaborations: [
        "I can understand why {text} would make you feel angry. It's important to acknowledge these feelings. ",
        "Your anger about {text} is valid. Sometimes, anger can be a signal that something needs to change. ",
        "Feeling angry about {text} is a natural response. It's good that you're expressing this emotion. ",
    ],
    coping_actions: [
        "practice deep breathing exercises",
        "write down your thoughts in a journal",
        "engage in physical exercise to release tension",
    ],
    follow_ups: [
        "What about {text} is frustrating you the most?",
        "Have you tried any strategies to manage your anger?",
        "Is there a way to address the source of your anger directly?",
    ],
};

const FEAR: ReplyTemplates = ReplyTemplates {
    opener: Some("It's completely natural to feel fear about '{text}'. "),
    elaborations: [
        "It's natural to feel fear when faced with {text}. Remember, you're stronger than you might think. ",
        "I hear your concerns about {text}. Fear is our body's way of trying to keep us safe. ",
        "Feeling fearful about {text} is understandable. Let's explore this feeling together. ",
    ],
    coping_actions: [
        "try a mindfulness meditation",
        "visualize a calm and safe place",
        "break down your concerns into smaller, manageable parts",
    ],
    follow_ups: [
        "What's the worst-case scenario you're imagining about {text}?",
        "Have you faced similar fears before? How did you handle them?",
        "What would help you feel more secure in this situation?",
    ],
};

const SURPRISE: ReplyTemplates = ReplyTemplates {
    opener: Some("It's intriguing to hear that you're feeling surprised about '{text}'. "),
    elaborations: [
        "Wow, {text} really caught you off guard! Surprises can sometimes shake up our world in unexpected ways. ",
        "I can sense your surprise about {text}. Unexpected events can often lead to new insights or opportunities. ",
        "It's interesting to hear about the surprise you experienced with {text}. How do you usually handle unexpected situations? ",
    ],
    coping_actions: [
        "take a moment to process your feelings",
        "consider the potential opportunities this surprise might bring",
        "share your experience with someone you trust",
    ],
    follow_ups: [
        "How has this surprise about {text} changed your perspective?",
        "Do you generally enjoy surprises, or do they make you uncomfortable?",
        "How do you think this surprise might affect your plans or decisions?",
    ],
};

// ============================================================================
// Generic fallback
// ============================================================================

const GENERIC: ReplyTemplates = ReplyTemplates {
    opener: None,
    elaborations: [
        "I see that {text} is bringing up some strong emotions for you. ",
        "Thank you for sharing your feelings about {text} with me. ",
        "It's important to acknowledge and process these emotions about {text}. ",
    ],
    coping_actions: [
        "take a few deep breaths",
        "reflect on your feelings",
        "consider talking to someone you trust",
    ],
    follow_ups: [
        "How are you feeling about this right now?",
        "Would you like to explore this feeling further?",
        "How do you think this might affect you going forward?",
    ],
};
