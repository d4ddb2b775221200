//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clipweaver_client::ClientConfig;
use clipweaver_models::{AnalysisParams, MaxScenes, ResponseFormat, Sensitivity};

#[derive(Parser, Debug)]
#[command(name = "clipweaver", author, version, about = "AI storyboarder for AI videos")]
pub struct Cli {
    /// Backend base URL (overrides CLIPWEAVER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a video and print the storyboard
    Analyze {
        /// Video file to upload
        video: PathBuf,

        /// Scene detection sensitivity, 0.1 to 0.9 (lower splits more)
        #[arg(long, default_value_t = 0.4, allow_negative_numbers = true)]
        sensitivity: f64,

        /// Maximum number of scenes, 1 to 20
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        max_scenes: i64,

        /// How to read a successful response: text or json
        #[arg(long)]
        response_format: Option<ResponseFormat>,

        /// Also write the result text to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that the backend is up
    Health,
}

impl Cli {
    /// Apply flag overrides on top of an environment-derived config.
    pub fn client_config(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout.filter(|s| *s > 0) {
            config.timeout = Some(std::time::Duration::from_secs(secs));
        }
        if let Command::Analyze {
            response_format: Some(format),
            ..
        } = &self.command
        {
            config.response_format = format.clone();
        }
        config
    }
}

impl Command {
    /// Clamped parameters for an `analyze` invocation.
    pub fn analysis_params(&self) -> Option<AnalysisParams> {
        match self {
            Command::Analyze {
                sensitivity,
                max_scenes,
                ..
            } => Some(AnalysisParams::new(
                Sensitivity::from_value(*sensitivity),
                MaxScenes::new(*max_scenes),
            )),
            Command::Health => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["clipweaver", "analyze", "clip.mp4"]).unwrap();
        let params = cli.command.analysis_params().unwrap();
        assert_eq!(params, AnalysisParams::default());

        let config = cli.client_config(ClientConfig::new("http://backend:13000"));
        assert_eq!(config.base_url, "http://backend:13000");
        assert_eq!(config.timeout, None);
        assert_eq!(config.response_format, ResponseFormat::Text);
    }

    #[test]
    fn test_out_of_range_flags_are_clamped() {
        let cli = Cli::try_parse_from([
            "clipweaver",
            "analyze",
            "clip.mp4",
            "--sensitivity",
            "-2",
            "--max-scenes",
            "50",
        ])
        .unwrap();
        let params = cli.command.analysis_params().unwrap();
        assert_eq!(params.sensitivity, Sensitivity::MIN);
        assert_eq!(params.max_scenes, MaxScenes::MAX);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "clipweaver",
            "--api-url",
            "https://api.example.com",
            "--timeout",
            "30",
            "analyze",
            "clip.mp4",
            "--response-format",
            "json",
            "-o",
            "storyboard.md",
        ])
        .unwrap();
        let config = cli.client_config(ClientConfig::default());
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(30)));
        assert_eq!(config.response_format, ResponseFormat::json());
        match cli.command {
            Command::Analyze { output, .. } => assert_eq!(output, Some(PathBuf::from("storyboard.md"))),
            Command::Health => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from([
            "clipweaver",
            "analyze",
            "clip.mp4",
            "--response-format",
            "xml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_health_has_no_params() {
        let cli = Cli::try_parse_from(["clipweaver", "health"]).unwrap();
        assert!(cli.command.analysis_params().is_none());
    }
}
