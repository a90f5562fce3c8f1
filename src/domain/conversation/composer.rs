//! Response composition engine.
//!
//! Turns `(emotion, text, user_id)` into an empathetic reply. The reply
//! always has the same shape; only the wording inside each segment is
//! randomized:
//!
//! 1. emotion-specific opener (omitted for unrecognized emotions)
//! 2. time-of-day framing
//! 3. intensity emphasis, when the estimated intensity exceeds the threshold
//! 4. emotion-specific elaboration
//! 5. coping suggestion
//! 6. follow-up question
//! 7. continuity with the user's previous message, if there was one
//!
//! The finished exchange is appended to the user's history.

use chrono::Timelike;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::Value;
use std::fmt::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::{Clock, SystemClock};

use super::emotion::Emotion;
use super::intensity::{IntensityEstimator, RandomIntensityEstimator, DEFAULT_INTENSITY_THRESHOLD};
use super::store::ConversationStore;
use super::templates::{render, templates_for, ReplyTemplates};
use super::time_of_day::TimeOfDay;
use super::turn::ConversationTurn;

const INTENSITY_EMPHASIS: &str = "I can sense that this is really important to you. ";

/// Composes replies and records them in a [`ConversationStore`].
pub struct ResponseComposer {
    store: Arc<ConversationStore>,
    intensity_estimator: Arc<dyn IntensityEstimator>,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
    intensity_threshold: f64,
}

/// The randomly chosen wording for one reply.
struct Selection {
    elaboration: &'static str,
    coping_action: &'static str,
    follow_up: &'static str,
}

impl ResponseComposer {
    /// Creates a composer with the placeholder intensity estimator, the
    /// system clock and an entropy-seeded random source.
    pub fn new(store: Arc<ConversationStore>) -> Self {
        Self {
            store,
            intensity_estimator: Arc::new(RandomIntensityEstimator),
            clock: Arc::new(SystemClock),
            rng: Mutex::new(StdRng::from_entropy()),
            intensity_threshold: DEFAULT_INTENSITY_THRESHOLD,
        }
    }

    /// Replaces the intensity estimator.
    pub fn with_intensity_estimator(mut self, estimator: Arc<dyn IntensityEstimator>) -> Self {
        self.intensity_estimator = estimator;
        self
    }

    /// Replaces the clock used for time-of-day framing and turn timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seeds template selection and the default intensity draw so a
    /// sequence of replies is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Sets the score above which the intensity emphasis is emitted.
    pub fn with_intensity_threshold(mut self, threshold: f64) -> Self {
        self.intensity_threshold = threshold;
        self
    }

    pub fn intensity_threshold(&self) -> f64 {
        self.intensity_threshold
    }

    /// The store this composer records into.
    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Composes a reply for `text` and appends the exchange to the user's
    /// history.
    ///
    /// Never fails: unrecognized or empty emotions use the generic templates.
    pub fn compose(&self, emotion: &str, text: &str, user_id: &str) -> String {
        let templates = templates_for(Emotion::parse(emotion));
        let now = self.clock.now();
        let time_of_day = TimeOfDay::from_hour(now.hour());
        let (intensity, selection) = self.draw(text, templates);

        let mut reply = String::new();

        if let Some(opener) = templates.opener {
            reply.push_str(&render(opener, text));
        }

        let _ = write!(
            reply,
            "As we talk this {time_of_day}, I want you to know that your feelings are valid. "
        );

        if intensity > self.intensity_threshold {
            reply.push_str(INTENSITY_EMPHASIS);
        }

        reply.push_str(&render(selection.elaboration, text));
        let _ = write!(reply, "One thing that might help is to {}. ", selection.coping_action);
        reply.push_str(&render(selection.follow_up, text));

        let timestamp = self.clock.timestamp();
        let turn = self.store.append_with(user_id, |previous| {
            if let Some(previous) = previous {
                let _ = write!(
                    reply,
                    " Earlier, we talked about {}. How does this relate to your current feelings?",
                    previous.text
                );
            }
            ConversationTurn::new(emotion, text, reply, timestamp)
        });

        tracing::debug!(
            user_id,
            emotion,
            %time_of_day,
            intensity,
            "Composed reply"
        );

        turn.response
    }

    /// Stores a caller-defined preference record, replacing any earlier one.
    ///
    /// Preferences are kept alongside history but do not influence replies.
    pub fn record_user_preference(&self, user_id: &str, preference: Value) {
        self.store.set_preference(user_id, preference);
    }

    /// Draws the intensity score and the wording from one locked source.
    fn draw(&self, text: &str, templates: &'static ReplyTemplates) -> (f64, Selection) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let intensity = self.intensity_estimator.estimate(text, &mut *rng);
        let selection = Selection {
            elaboration: pick(&templates.elaborations, &mut *rng),
            coping_action: pick(&templates.coping_actions, &mut *rng),
            follow_up: pick(&templates.follow_ups, &mut *rng),
        };
        (intensity, selection)
    }
}

fn pick(options: &[&'static str; 3], rng: &mut StdRng) -> &'static str {
    options.choose(rng).copied().unwrap_or(options[0])
}
