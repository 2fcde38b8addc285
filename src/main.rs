use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod init;
mod repo;
mod status;
mod types;

#[derive(Parser)]
#[command(name = "wyag")]
#[command(about = "Write yourself a git: repository bootstrap")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .wyag/ and a default conf
    Init {
        /// Worktree root (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Validate and display an existing .wyag/conf
    Status {
        /// Worktree root (defaults to the current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries command output only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("WYAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => resolve_root(path).and_then(init::run),
        Commands::Status { path } => resolve_root(path).and_then(status::run),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Use the given path, or fall back to the working directory
fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf, String> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir()
            .map_err(|e| format!("Cannot get working directory: {}", e)),
    }
}
