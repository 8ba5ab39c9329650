//! RW CLI - template helper inspection.
//!
//! Provides commands for:
//! - `resolve`: Resolve a page identifier to a relative URL
//! - `link`: Render an anchor link (optionally marking the current page)
//! - `relative`: Compute a true relative path between two pages
//! - `img`: Render an image tag

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ImageArgs, LinkArgs, RelativeArgs, ResolveArgs};
use output::Output;

/// RW - Template helpers.
#[derive(Parser)]
#[command(name = "rw", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (show resolution logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a page identifier relative to the current page.
    Resolve(ResolveArgs),
    /// Render an anchor link.
    Link(LinkArgs),
    /// Compute the relative path from the current page to a target path.
    Relative(RelativeArgs),
    /// Render an image tag.
    Img(ImageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Resolve(args) => args.execute(config_path),
        Commands::Link(args) => args.execute(config_path),
        Commands::Relative(args) => args.execute(),
        Commands::Img(args) => args.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
