use anyhow::{Context, Result};
use clap::Args;

use super::VerseArgs;

use crate::models::explanation::ExplainResponse;
use crate::services::explainer::Explainer;
use crate::utils::config::AppConfig;

/// Explain one verse from the command line
#[derive(Debug, Args)]
pub struct ExplainCommand {
    #[command(flatten)]
    pub verse: VerseArgs,

    /// Output JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    /// Execute the explain command
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        let verse = self.verse.resolve()?;
        let explainer = Explainer::from_config(config).context("failed to build HTTP clients")?;

        let explanation = explainer.explain(verse).await?;

        if self.json {
            let response = ExplainResponse { explanation };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{explanation}");
        }
        Ok(())
    }
}
