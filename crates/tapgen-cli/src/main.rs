//! tapgen - render Homebrew formulae for prebuilt CLI releases

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "tapgen")]
#[command(author, version, about = "tapgen - render Homebrew formulae for prebuilt releases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Homebrew formula for a release
    Render {
        /// Release metadata TOML file
        #[arg(long, default_value = "release.toml")]
        metadata: PathBuf,
        /// Write the formula here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Local arm64 artifact; its SHA-256 replaces the metadata digest
        #[arg(long)]
        arm64_artifact: Option<PathBuf>,
        /// Local x86_64 artifact; its SHA-256 replaces the metadata digest
        #[arg(long)]
        x86_64_artifact: Option<PathBuf>,
    },
    /// Validate a release metadata file
    Check {
        /// Release metadata TOML file
        metadata: PathBuf,
    },
    /// Compute SHA256 hash of files
    Hash {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            metadata,
            output,
            arm64_artifact,
            x86_64_artifact,
        } => cmd::render::render(
            &metadata,
            output.as_deref(),
            arm64_artifact.as_deref(),
            x86_64_artifact.as_deref(),
        ),
        Commands::Check { metadata } => cmd::check::check(&metadata),
        Commands::Hash { files } => cmd::hash::hash(&files),
    }
}
