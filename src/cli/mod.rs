// CLI module for command-line interface

pub mod explain;
pub mod prompt;
pub mod serve;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::verse::{VerseError, VerseRef};
use crate::utils::config::AppConfig;

use self::explain::ExplainCommand;
use self::prompt::PromptCommand;
use self::serve::ServeCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "tafsir-explainer")]
#[command(about = "Explain Quranic verses from translation and classical commentary")]
#[command(long_about = r#"Tafsir Explainer gathers the English translation of a verse together with
three commentaries (Asbab Al-Nuzul, Tafsir Ibn Kathir, Maarif-ul-Quran) and asks
a language model for an attributed explanation.

Configuration is read from an optional TOML file, then from the environment
(GROQ_API_KEY, GROQ_MODEL, HOST, PORT, ...). A .env file is loaded first.

Examples:
  tafsir-explainer serve                     Serve on 0.0.0.0:7860
  tafsir-explainer serve --port 8080         Serve on another port
  tafsir-explainer explain 2:255             Explain Ayat al-Kursi
  tafsir-explainer explain 2 255             Same verse, as two numbers
  tafsir-explainer prompt 1:1                Show the prompt without calling the model"#)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "TAFSIR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Explain one verse and print the result
    Explain(ExplainCommand),

    /// Print the prompt that would be sent to the model
    Prompt(PromptCommand),
}

/// Verse given as `SURAH:AYAH` or as two numbers
#[derive(Debug, Args)]
pub struct VerseArgs {
    /// Verse as SURAH:AYAH, or the surah number when AYAH follows
    #[arg(value_name = "VERSE")]
    pub verse: String,

    /// Ayah number, when the surah is given on its own
    pub ayah: Option<i64>,
}

impl VerseArgs {
    /// Resolve the arguments into a validated verse reference
    pub fn resolve(&self) -> Result<VerseRef, VerseError> {
        let Some(ayah) = self.ayah else {
            return self.verse.parse();
        };
        let surah = self
            .verse
            .trim()
            .parse::<i64>()
            .map_err(|_| VerseError::Malformed(self.verse.clone()))?;
        VerseRef::new(surah, ayah)
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Load configuration and execute a CLI command
    pub async fn execute(cli: Cli) -> Result<()> {
        let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

        match cli.command {
            Commands::Serve(cmd) => cmd.run(config).await,
            Commands::Explain(cmd) => cmd.run(&config).await,
            Commands::Prompt(cmd) => cmd.run(&config).await,
        }
    }
}
