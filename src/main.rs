// Tafsir Explainer
// Main CLI entry point

use clap::Parser;
use std::process;
use tafsir::cli::{Cli, CliDispatcher};
use tafsir::utils::logging;

#[tokio::main]
async fn main() {
    // a missing .env file is normal in containers
    dotenv::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli).await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
