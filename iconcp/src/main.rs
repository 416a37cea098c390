//! iconcp - copies the fixed PWA icon set between two directories
//!
//! Thin CLI over iconcp-core. Status lines go to stdout, logs and fatal
//! diagnostics go to stderr.

use std::{io, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use iconcp_core::{verify_icons, Copier, CopyConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Copy the fixed icon set (72 to 512 px) from a source to a destination directory
#[derive(Debug, Parser)]
#[command(name = "iconcp", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML file providing `source_root` and/or `destination_root`
    #[arg(long, global = true, env = "ICONCP_CONFIG")]
    config: Option<PathBuf>,

    /// Directory the icons are read from
    #[arg(long, global = true, env = "ICONCP_SOURCE_ROOT")]
    source_root: Option<PathBuf>,

    /// Directory the icons are copied into (created if absent)
    #[arg(long, global = true, env = "ICONCP_DESTINATION_ROOT")]
    destination_root: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, Default, Subcommand)]
enum Command {
    /// Copy every icon present at the source root (default)
    #[default]
    Copy,
    /// Check that the source root holds the full icon set, without copying
    Verify,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level)?;

    let config = resolve_config(&cli)?;
    tracing::debug!(
        "Source root: {}, destination root: {}",
        config.source_root.display(),
        config.destination_root.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or_default() {
        Command::Copy => {
            Copier::new(config).run(&mut out).context("Icon copy aborted")?;
        },
        Command::Verify => {
            verify_icons(&config.source_root, &mut out).context("Icon verification failed")?;
        },
    }
    Ok(())
}

fn init_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default tracing subscriber")
}

/// Built-in roots, then the settings file, then flags and environment
fn resolve_config(cli: &Cli) -> Result<CopyConfig> {
    let base = match &cli.config {
        Some(path) => CopyConfig::load(path)?,
        None => CopyConfig::default(),
    };
    Ok(base.with_overrides(cli.source_root.clone(), cli.destination_root.clone()))
}
