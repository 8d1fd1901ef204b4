//! Filedrop CLI
//!
//! Client for a remote file store: upload a file under your name, list
//! what is stored, delete by id.

mod api;
mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "filedrop")]
#[command(author, version, about = "Filedrop - client for a remote file store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored files
    List,

    /// Upload a file to the store
    Upload {
        /// Path of the file to upload
        file: PathBuf,

        /// Uploader name (prompted if omitted)
        #[arg(short, long)]
        uploader: Option<String>,
    },

    /// Delete a stored file by id
    Delete {
        /// Record id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "filedrop_cli=debug,filedrop_core=debug"
        } else {
            "filedrop_cli=info"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Starting Filedrop CLI");

    let result = match cli.command {
        Commands::List => commands::list::execute().await,
        Commands::Upload { file, uploader } => commands::upload::execute(&file, uploader).await,
        Commands::Delete { id } => commands::delete::execute(&id).await,
    };

    if let Err(ref e) = result {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}
