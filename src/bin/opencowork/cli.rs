//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// OpenCowork - AI-powered intelligent code generation and autonomous task execution system
#[derive(Parser)]
#[command(name = "opencowork")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the distribution version
    Version(VersionArgs),

    /// Show the distribution identity banner
    About(AboutArgs),

    /// List the declared public symbols
    Symbols(SymbolsArgs),

    /// Check the identity surface for problems
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct VersionArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AboutArgs {
    /// Emit the full identity report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SymbolsArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Only show symbols resolved from deferred modules
    #[arg(long)]
    pub deferred: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
