use anyhow::{Context, Result};
use clap::Args;

use crate::api::{self, context::AppState};
use crate::services::explainer::Explainer;
use crate::utils::config::AppConfig;

/// Run the HTTP server
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Interface to bind (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default: 7860)
    #[arg(long, short)]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Execute the serve command
    pub async fn run(&self, mut config: AppConfig) -> Result<()> {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        let explainer = Explainer::from_config(&config).context("failed to build HTTP clients")?;
        api::serve(AppState::new(explainer), &config.bind_address()).await
    }
}
