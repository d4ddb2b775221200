//! ClipWeaver command line binary.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use clipweaver_app::commands;
use clipweaver_app::logging::{init_tracing, LogFormat};
use clipweaver_app::{Cli, Command};
use clipweaver_client::{ClientConfig, StoryboardClient};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the command succeeded.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.client_config(ClientConfig::from_env());
    info!(base_url = %config.base_url, format = config.response_format.as_str(), "Client config");

    let client = StoryboardClient::new(config).context("failed to create storyboard client")?;

    let params = cli.command.analysis_params().unwrap_or_default();
    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Health => commands::health(&client, &mut stdout).await,
        Command::Analyze { video, output, .. } => {
            commands::analyze(client, &video, params, output.as_deref(), &mut stdout).await
        }
    }
}
