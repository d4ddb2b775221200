//! Upload form controller.
//!
//! Owns the selected video, the two tuning values, the analysis state and
//! the result text. A submit runs one cycle:
//!
//! ```text
//! Idle ─▶ Analyzing ─▶ Completed | Failed ─▶ Analyzing ─▶ ...
//! ```
//!
//! Result text survives new file selections and is only replaced when the
//! next cycle finishes.

use clipweaver_client::{AnalysisBackend, ClientResult};
use clipweaver_models::{AnalysisParams, AnalysisState, MaxScenes, SelectedVideo, Sensitivity};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::view::FormView;

/// Snapshot of what a submit sends, taken when the cycle starts.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub video: SelectedVideo,
    pub params: AnalysisParams,
}

/// Controller behind the upload form.
pub struct UploadForm<B> {
    backend: B,
    video: Option<SelectedVideo>,
    params: AnalysisParams,
    result: String,
    state: watch::Sender<AnalysisState>,
}

impl<B: AnalysisBackend> UploadForm<B> {
    /// Create an idle form with default parameters and no file.
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(AnalysisState::Idle);
        Self {
            backend,
            video: None,
            params: AnalysisParams::default(),
            result: String::new(),
            state,
        }
    }

    /// Replace the selected file. Does not submit anything.
    pub fn select_file(&mut self, video: SelectedVideo) {
        if !video.looks_like_video() {
            warn!(
                file = %video.file_name(),
                mime = %video.mime_type(),
                "Selected file does not look like a video"
            );
        }
        debug!(file = %video.file_name(), bytes = video.len(), "File selected");
        self.video = Some(video);
    }

    /// Set sensitivity from a slider value; clamped to `[0.1, 0.9]`.
    pub fn set_sensitivity(&mut self, value: f64) {
        self.params.sensitivity = Sensitivity::from_value(value);
    }

    /// Set the scene cap from a slider value; clamped to `[1, 20]`.
    pub fn set_max_scenes(&mut self, value: i64) {
        self.params.max_scenes = MaxScenes::new(value);
    }

    pub fn set_params(&mut self, params: AnalysisParams) {
        self.params = params;
    }

    pub fn params(&self) -> AnalysisParams {
        self.params
    }

    pub fn selected_file(&self) -> Option<&SelectedVideo> {
        self.video.as_ref()
    }

    pub fn state(&self) -> AnalysisState {
        *self.state.borrow()
    }

    pub fn is_analyzing(&self) -> bool {
        self.state().is_in_flight()
    }

    pub fn result_text(&self) -> &str {
        &self.result
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.state.subscribe()
    }

    /// Whether the submit affordance is enabled.
    pub fn can_submit(&self) -> bool {
        self.video.is_some() && !self.is_analyzing()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_analyzing() {
            "Analyzing..."
        } else {
            "Analyze Video"
        }
    }

    /// Enter `Analyzing` and hand back what to send.
    ///
    /// Returns `None` without touching any state when no file is selected
    /// or a cycle is already running.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if !self.can_submit() {
            debug!(state = %self.state(), has_file = self.video.is_some(), "Submit ignored");
            return None;
        }
        let video = self.video.clone()?;

        self.state.send_replace(AnalysisState::Analyzing);
        Some(AnalysisRequest {
            video,
            params: self.params,
        })
    }

    /// Record the outcome of the running cycle and leave `Analyzing`.
    pub fn finish_analysis(&mut self, outcome: ClientResult<String>) -> AnalysisState {
        let next = match outcome {
            Ok(text) => {
                info!(bytes = text.len(), "Analysis completed");
                self.result = text;
                AnalysisState::Completed
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                self.result = e.user_message().to_string();
                AnalysisState::Failed
            }
        };
        self.state.send_replace(next);
        next
    }

    /// Run one full submit cycle against the backend.
    ///
    /// `None` means the submit was not reachable (no file, or already
    /// analyzing). Otherwise the settled state is returned.
    pub async fn analyze(&mut self) -> Option<AnalysisState> {
        let request = self.begin_analysis()?;
        let outcome = self.backend.analyze(&request.video, &request.params).await;
        Some(self.finish_analysis(outcome))
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> FormView<'_> {
        FormView {
            file: self.video.as_ref(),
            params: self.params,
            submit_label: self.submit_label(),
            submit_enabled: self.can_submit(),
            result: (!self.result.is_empty()).then_some(self.result.as_str()),
        }
    }
}
