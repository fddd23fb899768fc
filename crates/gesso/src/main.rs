//! Gesso CLI - build-configuration assembler for the site pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gesso")]
#[command(about = "Build-configuration assembler for the gesso site pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to gesso.toml config file
    #[arg(short, long, default_value = "gesso.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the configuration and print its manifest as JSON
    Emit {
        /// Indent the emitted JSON
        #[arg(long)]
        pretty: bool,

        /// Project root holding the metadata document
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Verify the configuration composes and report its contents
    Check {
        /// Project root holding the metadata document
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Report which source files the resolved extensions claim
    Routes {
        /// Source directory to scan
        #[arg(short, long, default_value = "src/routes")]
        dir: PathBuf,

        /// Project root holding the metadata document
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps emitted JSON on stdout clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Emit { pretty, root } => {
            commands::emit::run(&cli.config, root, pretty)?;
        }
        Commands::Check { root } => {
            commands::check::run(&cli.config, root)?;
        }
        Commands::Routes { dir, root } => {
            commands::routes::run(&cli.config, root, &dir)?;
        }
    }

    Ok(())
}
