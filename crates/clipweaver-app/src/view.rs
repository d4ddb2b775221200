//! Terminal rendering of the upload form.

use std::fmt;

use clipweaver_models::{AnalysisParams, SelectedVideo};

pub const TITLE: &str = "ClipWeaver";
pub const TAGLINE: &str = "AI Storyboarder for AI Videos";

/// Borrowed snapshot of everything the form displays.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub file: Option<&'a SelectedVideo>,
    pub params: AnalysisParams,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Present only when there is result text to show
    pub result: Option<&'a str>,
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", TAGLINE)?;
        writeln!(f)?;

        match self.file {
            Some(video) => writeln!(
                f,
                "Video:       {} ({}, {} bytes)",
                video.file_name(),
                video.mime_type(),
                video.len()
            )?,
            None => writeln!(f, "Video:       (no file selected)")?,
        }
        writeln!(f, "Sensitivity: {}", self.params.sensitivity)?;
        writeln!(f, "Max scenes:  {}", self.params.max_scenes)?;

        if self.submit_enabled {
            writeln!(f, "[ {} ]", self.submit_label)?;
        } else {
            writeln!(f, "[ {} ] (disabled)", self.submit_label)?;
        }

        // Result text is written untouched, whitespace and all.
        if let Some(result) = self.result {
            writeln!(f)?;
            writeln!(f, "Result:")?;
            f.write_str(result)?;
        }
        Ok(())
    }
}
