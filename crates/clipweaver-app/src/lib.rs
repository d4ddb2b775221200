//! ClipWeaver upload form.
//!
//! The form holds a selected video, two scene detection parameters and the
//! text of the last analysis. It drives one request per submit through an
//! [`AnalysisBackend`](clipweaver_client::AnalysisBackend) and renders the
//! outcome for the terminal.

pub mod cli;
pub mod commands;
pub mod form;
pub mod logging;
pub mod view;

pub use cli::{Cli, Command};
pub use form::{AnalysisRequest, UploadForm};
pub use view::FormView;
