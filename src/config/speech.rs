//! Speech recognition configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Speech recognition service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Recognition endpoint that accepts raw audio
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Bearer token for the recognition service
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language tag passed to the service
    #[serde(default = "default_language")]
    pub language: String,
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let https = self.endpoint_url.starts_with("https://");
        if !https && !self.endpoint_url.starts_with("http://") {
            return Err(ValidationError::InvalidSpeechEndpoint);
        }
        if *environment == Environment::Production && !https {
            return Err(ValidationError::SpeechEndpointMustBeHttps);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

fn default_endpoint_url() -> String {
    "http://localhost:9000/v1/recognize".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_language() -> String {
    "en-US".to_string()
}
