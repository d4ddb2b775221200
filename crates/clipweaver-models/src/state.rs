//! Upload form analysis state.

use serde::{Deserialize, Serialize};

/// Where the form is in its analyze cycle.
///
/// `Idle` is only ever the initial state. Once a cycle has run the form
/// sits in `Completed` or `Failed` until the next submit; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Analyzing,
    /// Last request returned a success status
    Completed,
    /// Last request was rejected or never completed
    Failed,
}

impl AnalysisState {
    /// Get string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Analyzing => "analyzing",
            AnalysisState::Completed => "completed",
            AnalysisState::Failed => "failed",
        }
    }

    /// Whether a request is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, AnalysisState::Analyzing)
    }
}

impl std::fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
