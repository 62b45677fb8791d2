//! Pizzabot command-line host
//!
//! Reads one delivery request, prints the instructions (or the failure
//! message) to stdout and logs to stderr or a log file.
//!
//! # Usage
//!
//! ```bash
//! pizzabot "5x5 (1, 3) (4, 4)"
//! echo "5x5 (1, 3)" | pizzabot --format json
//! RUST_LOG=debug pizzabot --log-file ./log/pizza_delivery.log "5x5 (2, 2)"
//! ```

mod config;

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use config::{OutputFormat, PizzabotConfig};
use delivery::{DeliveryPlanner, DeliveryReport, TracingLog};
use tracing::info;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delivery request, e.g. "5x5 (1, 3) (4, 4)". Read from stdin when omitted.
    input: Option<String>,

    /// Append logs to this file instead of stderr (overrides PIZZABOT_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Output format (overrides PIZZABOT_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = PizzabotConfig::from_env().with_overrides(args.log_file, args.format);
    init_tracing(&config)?;

    let raw = match args.input {
        Some(input) => input,
        None => read_request(std::io::stdin().lock())?,
    };

    info!(
        format = ?config.format,
        log_file = ?config.log_file,
        bytes = raw.len(),
        "Pizzabot starting"
    );

    let report = DeliveryPlanner::new(TracingLog).plan(&raw);
    println!("{}", render_report(&report, config.format)?);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(config: &PizzabotConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Read the whole request, dropping one trailing line ending.
fn read_request(mut reader: impl Read) -> Result<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read delivery request from stdin")?;

    let trimmed_len = raw
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).len());
    if let Some(len) = trimmed_len {
        raw.truncate(len);
    }
    Ok(raw)
}

fn render_report(report: &DeliveryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string(report).context("Failed to serialize delivery report")
        }
    }
}
