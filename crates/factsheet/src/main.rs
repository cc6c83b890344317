//! Factsheet CLI - renders the built-in content into a static page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "factsheet")]
#[command(about = "Render the factsheet into a static HTML page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to factsheet.toml config file
    #[arg(short, long, default_value = "factsheet.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static page (default)
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scaffold a config file, template, and stylesheet
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command, building by default
    match cli.command {
        None => commands::build::run(&cli.config, None)?,
        Some(Commands::Build { output }) => commands::build::run(&cli.config, output)?,
        Some(Commands::Init { yes }) => commands::init::run(&cli.config, yes)?,
    }

    Ok(())
}
