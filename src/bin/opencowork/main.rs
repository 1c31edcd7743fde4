//! OpenCowork CLI - identity surface of the OpenCowork distribution

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("opencowork=debug")
    } else {
        EnvFilter::new("opencowork=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Version(args) => commands::version::execute(args),
        Commands::About(args) => commands::about::execute(args),
        Commands::Symbols(args) => commands::symbols::execute(args),
        Commands::Doctor => commands::doctor::execute(cli.verbose),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
