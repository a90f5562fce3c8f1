//! SetUserPreferenceHandler - Replaces a user's stored preference.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::conversation::ResponseComposer;
use crate::domain::foundation::{UserId, ValidationError};

#[derive(Debug, Clone)]
pub struct SetUserPreferenceCommand {
    pub user_id: String,
    pub preference: Value,
}

pub struct SetUserPreferenceHandler {
    composer: Arc<ResponseComposer>,
}

impl SetUserPreferenceHandler {
    pub fn new(composer: Arc<ResponseComposer>) -> Self {
        Self { composer }
    }

    /// Overwrites any earlier preference. The preference itself is opaque
    /// and never validated.
    pub fn handle(&self, cmd: SetUserPreferenceCommand) -> Result<(), ValidationError> {
        let user_id = UserId::new(cmd.user_id)?;
        self.composer
            .record_user_preference(user_id.as_str(), cmd.preference);
        tracing::debug!(user_id = %user_id, "Preference recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ConversationStore;
    use serde_json::json;

    fn setup() -> (SetUserPreferenceHandler, Arc<ResponseComposer>) {
        let composer = Arc::new(ResponseComposer::new(Arc::new(ConversationStore::new())));
        (SetUserPreferenceHandler::new(composer.clone()), composer)
    }

    #[test]
    fn overwrites_previous_preference() {
        let (handler, composer) = setup();

        for preference in [json!({"tone": "warm"}), json!({"tone": "direct"})] {
            handler
                .handle(SetUserPreferenceCommand {
                    user_id: "user1".to_string(),
                    preference,
                })
                .unwrap();
        }

        assert_eq!(
            composer.store().preference("user1"),
            Some(json!({"tone": "direct"}))
        );
        assert_eq!(composer.store().turn_count("user1"), 0);
    }

    #[test]
    fn empty_user_id_is_rejected() {
        let (handler, _) = setup();
        let result = handler.handle(SetUserPreferenceCommand {
            user_id: "".to_string(),
            preference: json!(null),
        });
        assert!(result.is_err());
    }
}
