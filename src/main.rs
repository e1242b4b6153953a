#![forbid(unsafe_code)]

//! `employee-tracker` — interactive menu for departments, roles and employees.
//!
//! Loads configuration, opens the `SQLite` database, and runs the menu loop
//! on the controlling terminal until the user quits.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use employee_tracker::menu;
use employee_tracker::persistence::db;
use employee_tracker::prompt::TerminalPrompter;
use employee_tracker::{AppError, Result, TrackerConfig};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "employee-tracker", about = "Manage departments, roles and employees", version, long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the database file path.
    #[arg(long)]
    database: Option<PathBuf>,

    /// Log output format (text or json). Logs go to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Insert a demo dataset when the database has no departments.
    #[arg(long)]
    seed: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => TrackerConfig::load_from_path(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(path) = &args.database {
        config.database.path.clone_from(path);
        config.validate()?;
    }

    init_tracing(args.log_format, &config.log_level)?;
    info!(db_path = %config.db_path().display(), "employee-tracker bootstrap");

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args, config))
}

async fn run(args: Cli, config: TrackerConfig) -> Result<()> {
    let pool = db::connect(&config.database).await?;

    menu::run_session(
        Arc::new(pool),
        config.manager_candidates,
        args.seed,
        TerminalPrompter::new(),
        io::stdout(),
    )
    .await
}

fn init_tracing(log_format: LogFormat, default_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
