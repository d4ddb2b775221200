//! Storyboard client configuration.

use std::time::Duration;

use clipweaver_models::response::{DEFAULT_RESULT_FALLBACK, DEFAULT_RESULT_FIELD};
use clipweaver_models::ResponseFormat;
use tracing::warn;

/// Port the reference backend binds when `BACKEND_PORT` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:13000";

/// Configuration for the storyboard client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis backend
    pub base_url: String,
    /// Whole-request timeout; `None` waits as long as the network layer does
    pub timeout: Option<Duration>,
    /// How a successful analysis body is turned into display text
    pub response_format: ResponseFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            response_format: ResponseFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Config pointing at the given backend, other fields defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CLIPWEAVER_API_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("CLIPWEAVER_REQUEST_TIMEOUT")
            .ok()
            .and_then(|raw| parse_timeout(&raw));

        let response_format = match std::env::var("CLIPWEAVER_RESPONSE_FORMAT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring CLIPWEAVER_RESPONSE_FORMAT: {}", e);
                ResponseFormat::Text
            }),
            Err(_) => ResponseFormat::Text,
        };

        Self {
            base_url,
            timeout,
            response_format: with_env_overrides(response_format),
        }
    }

    /// Join a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Seconds to wait for a whole request; `0` means no timeout.
fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            warn!("Ignoring CLIPWEAVER_REQUEST_TIMEOUT {:?}: {}", raw, e);
            None
        }
    }
}

fn with_env_overrides(format: ResponseFormat) -> ResponseFormat {
    match format {
        ResponseFormat::Json { .. } => ResponseFormat::Json {
            field: std::env::var("CLIPWEAVER_RESULT_FIELD")
                .unwrap_or_else(|_| DEFAULT_RESULT_FIELD.to_string()),
            fallback: std::env::var("CLIPWEAVER_RESULT_FALLBACK")
                .unwrap_or_else(|_| DEFAULT_RESULT_FALLBACK.to_string()),
        },
        other => other,
    }
}
