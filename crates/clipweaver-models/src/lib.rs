//! Shared data models for the ClipWeaver storyboard client.
//!
//! This crate provides the types the upload form works with:
//! - Scene detection parameters with their clamped domains
//! - The selected video file and its MIME metadata
//! - The analysis state machine
//! - Backend response interpretation and health reports

pub mod error;
pub mod params;
pub mod response;
pub mod state;
pub mod video;

// Re-export common types
pub use error::{ModelError, ModelResult};
pub use params::{AnalysisParams, MaxScenes, Sensitivity};
pub use response::{HealthResponse, ResponseFormat};
pub use state::AnalysisState;
pub use video::SelectedVideo;
