//! Lando Acquia CLI
//!
//! Resolves Acquia recipes into Lando services, tooling and proxy routes and
//! runs the pull/push prompt flows.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use acquia_core::Direction;
use cli::{Cli, Commands};
use commands::resolve::ResolveOptions;
use error::{CliError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.home.as_deref()).await,
        None => {
            println!("{} Acquia recipes for Lando", "lando-acquia".green().bold());
            println!();
            println!("Run {} for available commands.", "lando-acquia --help".cyan());
            Ok(())
        }
    }
}

async fn execute_command(cmd: Commands, home: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::Resolve {
            file,
            conf_dest,
            domain,
            http_port,
            https_port,
            format,
        } => {
            let opts = ResolveOptions {
                home,
                conf_dest: conf_dest.as_deref(),
                domain: &domain,
                http_port,
                https_port,
                format,
            };
            commands::run_resolve(&file, &opts)
        }
        Commands::Tooling { database } => commands::run_tooling(&database),
        Commands::Keys { app, json } => commands::run_keys(home, app.as_deref(), json),
        Commands::Pull(args) => commands::run_task(Direction::Pull, home, &args).await,
        Commands::Push(args) => commands::run_task(Direction::Push, home, &args).await,
        Commands::Apps {
            credentials,
            json,
            endpoints,
        } => commands::run_apps(&credentials, &endpoints, json).await,
        Commands::PostKey {
            path,
            label,
            credentials,
            endpoints,
        } => commands::run_post_key(&path, &label, &credentials, &endpoints).await,
        Commands::AcliUuid { write, file } => commands::run_acli_uuid(&file, write.as_deref()),
    }
}
