//! EmpathyAI server binary.
//!
//! Loads configuration from the environment, wires adapters to the reply
//! composer, and serves the HTTP API until interrupted.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use empathy_ai::adapters::classifier::LexiconEmotionClassifier;
use empathy_ai::adapters::http::{build_app, ChatAppState};
use empathy_ai::adapters::memory::{InMemoryChatRepository, InMemoryFeedbackRepository};
use empathy_ai::adapters::postgres::{PostgresChatRepository, PostgresFeedbackRepository};
use empathy_ai::adapters::speech::{HttpSpeechTranscriber, HttpTranscriberConfig};
use empathy_ai::config::{AppConfig, ComposerConfig, DatabaseConfig, ServerConfig, SpeechConfig};
use empathy_ai::domain::conversation::{ConversationStore, ResponseComposer};
use empathy_ai::ports::{ChatRepository, FeedbackRepository};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let composer = Arc::new(build_composer(&config.composer));
    let (chat_repository, feedback_repository) = build_repositories(&config.database).await?;
    let transcriber = Arc::new(build_transcriber(&config.speech)?);

    let mut state = ChatAppState::new(composer, chat_repository, feedback_repository, transcriber)
        .with_verbose_errors(config.features.verbose_errors);
    if config.features.auto_classify_emotion {
        state = state.with_classifier(Arc::new(LexiconEmotionClassifier::new()));
    }

    let app = build_app(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "EmpathyAI listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG`
/// overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}

fn build_composer(config: &ComposerConfig) -> ResponseComposer {
    let mut store = ConversationStore::new();
    if let Some(limit) = config.max_turns_per_user {
        store = store.with_max_turns_per_user(limit);
    }

    let mut composer = ResponseComposer::new(Arc::new(store))
        .with_intensity_threshold(config.intensity_threshold);
    if let Some(seed) = config.rng_seed {
        composer = composer.with_seed(seed);
    }
    composer
}

async fn build_repositories(
    config: &DatabaseConfig,
) -> Result<(Arc<dyn ChatRepository>, Arc<dyn FeedbackRepository>), BoxError> {
    let Some(url) = config.url() else {
        tracing::warn!("No database configured, chats and feedback are kept in memory");
        return Ok((
            Arc::new(InMemoryChatRepository::new()),
            Arc::new(InMemoryFeedbackRepository::new()),
        ));
    };

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok((
        Arc::new(PostgresChatRepository::new(pool.clone())),
        Arc::new(PostgresFeedbackRepository::new(pool)),
    ))
}

fn build_transcriber(config: &SpeechConfig) -> Result<HttpSpeechTranscriber, BoxError> {
    let mut transcriber_config = HttpTranscriberConfig::new(&config.endpoint_url)
        .with_language(&config.language)
        .with_timeout(config.timeout());
    if let Some(key) = config.api_key() {
        transcriber_config = transcriber_config.with_api_key(key);
    }
    Ok(HttpSpeechTranscriber::new(transcriber_config)?)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
