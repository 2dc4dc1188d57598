//! tasks - interactive command-line task tracker.

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use std::path::PathBuf;
use std::process::ExitCode;
use tasks_core::{Config, Store, DEFAULT_CONFIG_FILE};
use tokio::io::BufReader;
use tracing::{info, warn};

mod command;
mod commands;
mod display;
mod repl;

use display::Printer;
use repl::Repl;

#[derive(Parser)]
#[command(name = "tasks")]
#[command(about = "Track tasks from an interactive prompt", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (default: ./tasks.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Task file, overriding `storage.path` from the configuration
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip clearing the screen and the startup banner
    #[arg(long)]
    quiet: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> ExitCode {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config_path, config) = resolve_config(&cli)?;
    let mut printer = Printer::stdout(config.display.color);

    if cli.write_config {
        config.save(&config_path)?;
        printer.info(format!("Configuration written to {}", config_path.display()))?;
        return Ok(());
    }
    if config.display.banner {
        // Not fatal: stdout may not be a terminal.
        let _ = Term::stdout().clear_screen();
        printer.announce("\nTask CLI starting.")?;
    }

    printer.info("Connecting to database.")?;
    info!(path = %config.storage.path.display(), "opening task store");
    // Without durable state there is nothing to do: failure here ends the process.
    let store = Store::from_config(&config.storage).with_context(|| {
        format!(
            "failed to open task file {}",
            config.storage.path.display()
        )
    })?;
    printer.announce("Database connected successfully.")?;
    printer.info("Type HELP for a list of commands.")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(async {
        let input = BufReader::new(tokio::io::stdin());
        Repl::new(&store, &mut printer)
            .run(input, interrupted())
            .await
    });

    // The blocking stdin reader cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}

/// Loads the configuration file and applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<(PathBuf, Config)> {
    let path = cli.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = Config::load(&path)?;
    if let Some(file) = &cli.file {
        config.storage.path = file.clone();
    }
    if cli.no_color {
        config.display.color = false;
    }
    if cli.quiet {
        config.display.banner = false;
    }
    Ok((path, config))
}

/// Resolves on the first Ctrl-C. If the handler cannot be installed it never
/// resolves, leaving `exit` and end of input as the ways out.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
