//! In-memory conversation state owned by the caller.
//!
//! Holds per-user history and preferences. A single coarse lock guards each
//! map; reading the previous turn and appending the new one happen inside
//! the same critical section, so concurrent messages from one user can never
//! interleave or lose entries.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use super::turn::ConversationTurn;

/// Per-user conversation history and preferences.
///
/// Starts empty. History entries are created lazily on a user's first
/// message and only ever appended to.
#[derive(Debug, Default)]
pub struct ConversationStore {
    histories: Mutex<HashMap<String, VecDeque<ConversationTurn>>>,
    preferences: RwLock<HashMap<String, Value>>,
    max_turns_per_user: Option<usize>,
}

impl ConversationStore {
    /// Creates an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` turns per user, evicting the oldest first.
    ///
    /// A limit of zero is treated as one: the previous turn must survive
    /// for continuity.
    pub fn with_max_turns_per_user(mut self, limit: usize) -> Self {
        self.max_turns_per_user = Some(limit.max(1));
        self
    }

    /// Returns the configured per-user retention bound.
    pub fn max_turns_per_user(&self) -> Option<usize> {
        self.max_turns_per_user
    }

    /// Builds and appends a turn atomically.
    ///
    /// `build` receives the user's most recent turn (if any) and returns the
    /// turn to append. The lock is held while `build` runs.
    pub fn append_with<F>(&self, user_id: &str, build: F) -> ConversationTurn
    where
        F: FnOnce(Option<&ConversationTurn>) -> ConversationTurn,
    {
        let mut histories = self.lock_histories();
        let history = histories.entry(user_id.to_string()).or_default();

        let turn = build(history.back());
        history.push_back(turn.clone());

        if let Some(limit) = self.max_turns_per_user {
            while history.len() > limit {
                history.pop_front();
            }
        }

        turn
    }

    /// Returns a copy of a user's history, oldest first.
    pub fn history(&self, user_id: &str) -> Vec<ConversationTurn> {
        self.lock_histories()
            .get(user_id)
            .map(|turns| turns.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the user's most recent turn.
    pub fn last_turn(&self, user_id: &str) -> Option<ConversationTurn> {
        self.lock_histories()
            .get(user_id)
            .and_then(|turns| turns.back().cloned())
    }

    /// Number of retained turns for a user.
    pub fn turn_count(&self, user_id: &str) -> usize {
        self.lock_histories().get(user_id).map_or(0, VecDeque::len)
    }

    /// Number of users with at least one turn.
    pub fn user_count(&self) -> usize {
        self.lock_histories().len()
    }

    /// Stores a preference record, replacing any earlier one.
    ///
    /// Returns the replaced record.
    pub fn set_preference(&self, user_id: &str, preference: Value) -> Option<Value> {
        self.preferences
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.to_string(), preference)
    }

    /// Returns the stored preference record for a user.
    pub fn preference(&self, user_id: &str) -> Option<Value> {
        self.preferences
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn lock_histories(&self) -> MutexGuard<'_, HashMap<String, VecDeque<ConversationTurn>>> {
        self.histories.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    fn turn(text: &str) -> ConversationTurn {
        ConversationTurn::new("joy", text, format!("reply to {text}"), Timestamp::now())
    }

    mod history {
        use super::*;

        #[test]
        fn new_store_is_empty() {
            let store = ConversationStore::new();
            assert_eq!(store.user_count(), 0);
            assert!(store.history("user1").is_empty());
            assert!(store.last_turn("user1").is_none());
        }

        #[test]
        fn first_append_sees_no_previous_turn() {
            let store = ConversationStore::new();
            store.append_with("user1", |previous| {
                assert!(previous.is_none());
                turn("first")
            });
            assert_eq!(store.turn_count("user1"), 1);
        }

        #[test]
        fn append_sees_most_recent_turn() {
            let store = ConversationStore::new();
            store.append_with("user1", |_| turn("first"));
            store.append_with("user1", |previous| {
                assert_eq!(previous.map(|t| t.text.as_str()), Some("first"));
                turn("second")
            });

            let texts: Vec<_> = store.history("user1").into_iter().map(|t| t.text).collect();
            assert_eq!(texts, vec!["first", "second"]);
        }

        #[test]
        fn users_are_isolated() {
            let store = ConversationStore::new();
            store.append_with("user1", |_| turn("a"));
            store.append_with("user2", |previous| {
                assert!(previous.is_none());
                turn("b")
            });
            assert_eq!(store.user_count(), 2);
            assert_eq!(store.turn_count("user1"), 1);
            assert_eq!(store.turn_count("user2"), 1);
        }

        #[test]
        fn retention_bound_evicts_oldest() {
            let store = ConversationStore::new().with_max_turns_per_user(2);
            for text in ["one", "two", "three"] {
                store.append_with("user1", |_| turn(text));
            }
            let texts: Vec<_> = store.history("user1").into_iter().map(|t| t.text).collect();
            assert_eq!(texts, vec!["two", "three"]);
        }

        #[test]
        fn zero_retention_still_keeps_previous_turn() {
            let store = ConversationStore::new().with_max_turns_per_user(0);
            store.append_with("user1", |_| turn("one"));
            assert_eq!(store.last_turn("user1").unwrap().text, "one");
        }

        #[test]
        fn concurrent_appends_lose_nothing() {
            let store = Arc::new(ConversationStore::new());
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || {
                        for i in 0..50 {
                            store.append_with("shared", |_| turn(&i.to_string()));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
            assert_eq!(store.turn_count("shared"), 400);
        }
    }

    mod preferences {
        use super::*;

        #[test]
        fn set_then_read() {
            let store = ConversationStore::new();
            assert!(store.set_preference("user1", json!({"tone": "gentle"})).is_none());
            assert_eq!(store.preference("user1"), Some(json!({"tone": "gentle"})));
        }

        #[test]
        fn overwrite_returns_previous() {
            let store = ConversationStore::new();
            store.set_preference("user1", json!({"tone": "gentle"}));
            let previous = store.set_preference("user1", json!({"tone": "direct"}));
            assert_eq!(previous, Some(json!({"tone": "gentle"})));
            assert_eq!(store.preference("user1"), Some(json!({"tone": "direct"})));
        }

        #[test]
        fn preferences_do_not_touch_history() {
            let store = ConversationStore::new();
            store.append_with("user1", |_| turn("hello"));
            store.set_preference("user1", json!(null));
            assert_eq!(store.turn_count("user1"), 1);
        }
    }
}
