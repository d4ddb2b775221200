//! Storyboard backend HTTP client.

use async_trait::async_trait;
use clipweaver_models::{AnalysisParams, HealthResponse, SelectedVideo};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::backend::AnalysisBackend;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Multipart field carrying the video bytes.
pub const VIDEO_FIELD: &str = "video";

/// Client for the storyboard analysis backend.
///
/// Requests are sent exactly once. There is no retry loop and, unless the
/// config sets one, no timeout.
#[derive(Debug, Clone)]
pub struct StoryboardClient {
    http: Client,
    config: ClientConfig,
}

impl StoryboardClient {
    /// Create a new storyboard client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", config.base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Upload a video and return the storyboard text.
    pub async fn analyze(&self, video: &SelectedVideo, params: &AnalysisParams) -> ClientResult<String> {
        let url = self.config.endpoint("analyze");

        info!(
            file = %video.file_name(),
            bytes = video.len(),
            scene_threshold = %params.sensitivity,
            max_scenes = %params.max_scenes,
            "Submitting video for analysis"
        );

        let response = self
            .http
            .post(&url)
            .multipart(build_form(video, params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Analysis rejected by backend");
            return Err(ClientError::Rejected { status });
        }

        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Analysis response received");

        self.config
            .response_format
            .extract(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Fetch the backend's health report.
    pub async fn health_check(&self) -> ClientResult<HealthResponse> {
        let url = self.config.endpoint("health");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Backend health check failed: {}", status);
            return Err(ClientError::Rejected { status });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("health report: {}", e)))
    }
}

#[async_trait]
impl AnalysisBackend for StoryboardClient {
    async fn analyze(&self, video: &SelectedVideo, params: &AnalysisParams) -> ClientResult<String> {
        StoryboardClient::analyze(self, video, params).await
    }
}

/// Build the `/analyze` multipart body: the video followed by the
/// parameters as decimal text.
pub fn build_form(video: &SelectedVideo, params: &AnalysisParams) -> Form {
    let mut form = Form::new().part(VIDEO_FIELD, video_part(video));
    for (name, value) in params.form_fields() {
        form = form.text(name, value);
    }
    form
}

fn video_part(video: &SelectedVideo) -> Part {
    let part = || Part::bytes(video.data().to_vec()).file_name(video.file_name().to_string());
    part().mime_str(video.mime_type()).unwrap_or_else(|e| {
        warn!(mime = %video.mime_type(), "Unusable MIME type, sending without one: {}", e);
        part()
    })
}
