// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! hwbot - a homework review status watcher.
//!
//! Binary entry point: parses the CLI, loads and validates configuration,
//! and hands off to the watch loop or the config printer.

mod show;
mod watch;

use clap::{Parser, Subcommand};
use tracing::error;

/// hwbot - watches Practicum homework reviews and reports changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "hwbot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the homework status watcher (the default).
    Watch,
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup. Config problems are
    // fatal before anything else runs.
    let config = match hwbot_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            hwbot_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Config) => show::run_config(&config),
        Some(Commands::Watch) | None => {
            init_tracing(&config.agent.log_level);
            if let Err(e) = watch::run_watch(config).await {
                error!(error = %e, "hwbot terminated");
                std::process::exit(1);
            }
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hwbot={log_level},hwbot_core={log_level},hwbot_config={log_level},\
             hwbot_practicum={log_level},hwbot_telegram={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
