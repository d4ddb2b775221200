//! The seam between the upload form and whatever performs the analysis.

use async_trait::async_trait;
use clipweaver_models::{AnalysisParams, SelectedVideo};

use crate::error::ClientResult;

/// Performs one analysis request.
///
/// `Ok` carries the display text of a successful response. A non-success
/// status is `ClientError::Rejected`; a request that never completed is
/// `ClientError::Transport`.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, video: &SelectedVideo, params: &AnalysisParams) -> ClientResult<String>;
}
