//! Command handlers behind the `clipweaver` binary.
//!
//! Each handler writes its report to the given writer and returns whether
//! the command succeeded, which the binary turns into the exit code.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use clipweaver_client::{AnalysisBackend, StoryboardClient};
use clipweaver_models::{AnalysisParams, AnalysisState, SelectedVideo};

use crate::form::UploadForm;

/// Run one submit cycle for the video at `path` and print the form.
///
/// The storyboard is saved to `output` only when the cycle completed.
pub async fn analyze<B, W>(
    backend: B,
    path: &Path,
    params: AnalysisParams,
    output: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<bool>
where
    B: AnalysisBackend,
    W: Write,
{
    let video = SelectedVideo::from_path(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut form = UploadForm::new(backend);
    form.select_file(video);
    form.set_params(params);

    let state = form.analyze().await;
    write!(out, "{}", form.view())?;
    if !form.result_text().ends_with('\n') {
        writeln!(out)?;
    }

    if let (Some(output), Some(AnalysisState::Completed)) = (output, state) {
        tokio::fs::write(output, form.result_text())
            .await
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), "Storyboard saved");
    }

    Ok(state == Some(AnalysisState::Completed))
}

/// Print the backend's health report. Healthy means every service is operational.
pub async fn health<W: Write>(client: &StoryboardClient, out: &mut W) -> anyhow::Result<bool> {
    let health = client.health_check().await.context("health check failed")?;

    writeln!(out, "status:  {}", health.status)?;
    if let Some(version) = &health.version {
        writeln!(out, "version: {}", version)?;
    }
    let mut services: Vec<_> = health.services.iter().collect();
    services.sort();
    for (name, status) in services {
        writeln!(out, "  {:<16} {}", name, status)?;
    }

    Ok(health.is_healthy() && health.degraded_services().is_empty())
}
