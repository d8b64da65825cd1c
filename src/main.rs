//! certboard - inspect role-scoped permissions and menus
//!
//! Loads configuration, starts a session and prints what the session's role
//! may do as JSON.

#![allow(missing_docs)]

use certboard::cli::{Cli, execute, load_config};
use certboard::utils::init_logging;
use clap::Parser;
use std::process::ExitCode;

async fn run(cli: Cli) -> certboard::Result<()> {
    let config = load_config(&cli).await?;
    init_logging(config.logging())?;

    let mut stdout = std::io::stdout().lock();
    execute(&cli, &config, &mut stdout)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
