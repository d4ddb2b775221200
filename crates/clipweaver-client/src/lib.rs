//! Client for the ClipWeaver storyboard backend.
//!
//! The backend exposes a single analysis endpoint that accepts a video
//! upload plus scene detection parameters and answers with a storyboard.
//! Scene detection and description happen entirely server side; this crate
//! only speaks the wire contract.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;

pub use backend::AnalysisBackend;
pub use client::StoryboardClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use reqwest::StatusCode;
