use anyhow::{Context, Result};
use clap::Args;

use super::VerseArgs;

use crate::services::explainer::Explainer;
use crate::utils::config::AppConfig;

/// Show the assembled prompt for a verse without calling the model
#[derive(Debug, Args)]
pub struct PromptCommand {
    #[command(flatten)]
    pub verse: VerseArgs,

    /// Output the translation, commentary and prompt as JSON
    #[arg(long)]
    pub json: bool,
}

impl PromptCommand {
    /// Execute the prompt command
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        let verse = self.verse.resolve()?;
        let explainer = Explainer::from_config(config).context("failed to build HTTP clients")?;

        let prepared = explainer.prepare(verse).await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&prepared)?);
        } else {
            println!("{}", prepared.prompt);
        }
        Ok(())
    }
}
