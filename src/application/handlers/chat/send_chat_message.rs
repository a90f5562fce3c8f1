//! SendChatMessageHandler - Composes a reply for an inbound message and
//! persists it under the caller's chat id.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::ResponseComposer;
use crate::domain::foundation::{ChatId, DomainError, UserId, ValidationError};
use crate::ports::{ChatRecord, ChatRepository, EmotionClassifier};

/// Command to answer one chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: String,
    pub chat_id: String,
    pub text: String,
    /// Emotion label from the client. When absent or blank the classifier,
    /// if any, is asked instead.
    pub emotion: Option<String>,
}

/// Result of answering a chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub response: String,
    /// Label handed to the composer, `None` when generic phrasing was used.
    pub emotion_used: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum SendChatMessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Message text cannot be empty")]
    EmptyText,

    #[error("Failed to persist reply: {0}")]
    Repository(#[from] DomainError),
}

/// Handler for inbound chat messages.
pub struct SendChatMessageHandler {
    composer: Arc<ResponseComposer>,
    chat_repository: Arc<dyn ChatRepository>,
    classifier: Option<Arc<dyn EmotionClassifier>>,
}

impl SendChatMessageHandler {
    pub fn new(composer: Arc<ResponseComposer>, chat_repository: Arc<dyn ChatRepository>) -> Self {
        Self {
            composer,
            chat_repository,
            classifier: None,
        }
    }

    /// Enables classification of messages that arrive without an emotion.
    pub fn with_classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, SendChatMessageError> {
        // 1. Validate identifiers and text
        let user_id = UserId::new(cmd.user_id)?;
        let chat_id = ChatId::new(cmd.chat_id)?;
        if cmd.text.trim().is_empty() {
            return Err(SendChatMessageError::EmptyText);
        }

        // 2. Resolve the emotion label; a blank label counts as absent
        let emotion_used = match cmd.emotion.filter(|emotion| !emotion.trim().is_empty()) {
            Some(emotion) => Some(emotion),
            None => self.classify(&cmd.text).await,
        };

        tracing::info!(
            user_id = %user_id,
            chat_id = %chat_id,
            emotion = emotion_used.as_deref().unwrap_or(""),
            "Received chat message"
        );

        // 3. Compose
        let response = self.composer.compose(
            emotion_used.as_deref().unwrap_or(""),
            &cmd.text,
            user_id.as_str(),
        );

        // 4. Persist
        let record = ChatRecord::ai_reply(chat_id, user_id, response.clone(), emotion_used.clone());
        self.chat_repository.save(&record).await.map_err(|err| {
            tracing::error!(chat_id = %record.chat_id, error = %err, "Failed to persist reply");
            err
        })?;

        Ok(SendChatMessageResult {
            response,
            emotion_used,
        })
    }

    /// Top classifier label, or `None` when classification is off or fails.
    async fn classify(&self, text: &str) -> Option<String> {
        let classifier = self.classifier.as_ref()?;
        match classifier.classify(text).await {
            Ok(distribution) => distribution.top_label().map(str::to_string),
            Err(err) => {
                tracing::warn!(error = %err, "Emotion classification failed, using generic reply");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::classifier::LexiconEmotionClassifier;
    use crate::domain::conversation::{ConversationStore, FixedIntensityEstimator};
    use crate::domain::foundation::{ErrorCode, FixedClock};
    use crate::ports::{ClassificationError, EmotionDistribution};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockChatRepository {
        saved: Mutex<Vec<ChatRecord>>,
        fail_save: bool,
    }

    impl MockChatRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<ChatRecord> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatRepository for MockChatRepository {
        async fn save(&self, record: &ChatRecord) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::database("Simulated save failure"));
            }
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn find_by_id(&self, chat_id: &ChatId) -> Result<Option<ChatRecord>, DomainError> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .find(|r| &r.chat_id == chat_id)
                .cloned())
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl EmotionClassifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<EmotionDistribution, ClassificationError> {
            Err(ClassificationError::Unavailable("model not loaded".into()))
        }
    }

    fn composer() -> Arc<ResponseComposer> {
        Arc::new(
            ResponseComposer::new(Arc::new(ConversationStore::new()))
                .with_clock(Arc::new(FixedClock::at_hour(9)))
                .with_intensity_estimator(Arc::new(FixedIntensityEstimator(0.0)))
                .with_seed(7),
        )
    }

    fn command(emotion: Option<&str>, text: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            user_id: "user1".to_string(),
            chat_id: "chat1".to_string(),
            text: text.to_string(),
            emotion: emotion.map(str::to_string),
        }
    }

    mod success {
        use super::*;

        #[tokio::test]
        async fn composes_and_persists_reply() {
            let repo = Arc::new(MockChatRepository::new());
            let handler = SendChatMessageHandler::new(composer(), repo.clone());

            let result = handler
                .handle(command(Some("sadness"), "losing my job"))
                .await
                .unwrap();

            assert!(result.response.contains("losing my job"));
            assert_eq!(result.emotion_used.as_deref(), Some("sadness"));

            let saved = repo.saved();
            assert_eq!(saved.len(), 1);
            assert_eq!(saved[0].chat_id.as_str(), "chat1");
            assert_eq!(saved[0].text, result.response);
            assert_eq!(saved[0].emotion.as_deref(), Some("sadness"));
        }

        #[tokio::test]
        async fn records_turn_in_history() {
            let composer = composer();
            let handler =
                SendChatMessageHandler::new(composer.clone(), Arc::new(MockChatRepository::new()));

            handler.handle(command(Some("joy"), "got the job")).await.unwrap();

            assert_eq!(composer.store().turn_count("user1"), 1);
        }

        #[tokio::test]
        async fn unknown_emotion_is_passed_through() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()));
            let result = handler
                .handle(command(Some("neutral"), "just a day"))
                .await
                .unwrap();
            assert_eq!(result.emotion_used.as_deref(), Some("neutral"));
            assert!(!result.response.is_empty());
        }
    }

    mod classification {
        use super::*;

        #[tokio::test]
        async fn missing_emotion_uses_classifier() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()))
                    .with_classifier(Arc::new(LexiconEmotionClassifier::new()));

            let result = handler
                .handle(command(None, "I am so scared and anxious"))
                .await
                .unwrap();

            assert_eq!(result.emotion_used.as_deref(), Some("fear"));
        }

        #[tokio::test]
        async fn blank_emotion_is_classified() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()))
                    .with_classifier(Arc::new(LexiconEmotionClassifier::new()));

            for label in ["", "   "] {
                let result = handler
                    .handle(command(Some(label), "I am so scared and anxious"))
                    .await
                    .unwrap();
                assert_eq!(result.emotion_used.as_deref(), Some("fear"));
            }
        }

        #[tokio::test]
        async fn blank_emotion_without_classifier_is_generic() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()));
            let result = handler.handle(command(Some(""), "I am sad")).await.unwrap();
            assert!(result.emotion_used.is_none());
        }

        #[tokio::test]
        async fn explicit_emotion_skips_classifier() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()))
                    .with_classifier(Arc::new(FailingClassifier));

            let result = handler
                .handle(command(Some("joy"), "I am so scared"))
                .await
                .unwrap();

            assert_eq!(result.emotion_used.as_deref(), Some("joy"));
        }

        #[tokio::test]
        async fn classifier_failure_degrades_to_generic() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()))
                    .with_classifier(Arc::new(FailingClassifier));

            let result = handler.handle(command(None, "hello")).await.unwrap();

            assert!(result.emotion_used.is_none());
            assert!(result.response.contains("your feelings are valid"));
        }

        #[tokio::test]
        async fn no_classifier_means_generic() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()));
            let result = handler.handle(command(None, "I am sad")).await.unwrap();
            assert!(result.emotion_used.is_none());
        }
    }

    mod failures {
        use super::*;

        #[tokio::test]
        async fn blank_text_is_rejected() {
            let repo = Arc::new(MockChatRepository::new());
            let handler = SendChatMessageHandler::new(composer(), repo.clone());

            let result = handler.handle(command(Some("joy"), "   ")).await;

            assert!(matches!(result, Err(SendChatMessageError::EmptyText)));
            assert!(repo.saved().is_empty());
        }

        #[tokio::test]
        async fn empty_ids_are_rejected() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::new()));

            let mut cmd = command(Some("joy"), "hi");
            cmd.user_id = String::new();
            assert!(matches!(
                handler.handle(cmd).await,
                Err(SendChatMessageError::Validation(_))
            ));

            let mut cmd = command(Some("joy"), "hi");
            cmd.chat_id = " ".to_string();
            assert!(matches!(
                handler.handle(cmd).await,
                Err(SendChatMessageError::Validation(_))
            ));
        }

        #[tokio::test]
        async fn persistence_failure_is_reported() {
            let handler =
                SendChatMessageHandler::new(composer(), Arc::new(MockChatRepository::failing()));

            let result = handler.handle(command(Some("anger"), "traffic")).await;

            match result {
                Err(SendChatMessageError::Repository(err)) => {
                    assert_eq!(err.code(), ErrorCode::DatabaseError)
                }
                other => panic!("expected repository error, got {:?}", other),
            }
        }
    }
}
