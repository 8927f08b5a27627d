//! Pidguard CLI - Single-instance guard over PID record files
//!
//! Exit codes: 0 = running / success, 1 = not running, 2 = error.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pidguard_core::application::ProcessGuard;
use pidguard_core::domain::WorkerName;
use pidguard_core::port::{RuntimeDirs, SystemProcessIdentity};
use pidguard_core::GuardError;
use pidguard_infra_fs::{FixedRuntimeDirs, FsStateDirectory, FsWriteFactory};
use pidguard_infra_system::SystemProcessProbe;

const DEFAULT_STATE_DIR: &str = "~/.pidguard/run";

#[derive(Parser)]
#[command(name = "pidguard")]
#[command(about = "Single-instance process guard over PID record files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Runtime-state directory holding the record files
    #[arg(long, env = "PIDGUARD_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    state_dir: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a live process holds the worker's record
    Status {
        /// Worker name
        worker: String,

        /// Emit a JSON report instead of a human-readable line
        #[arg(long)]
        json: bool,

        /// Suppress output; the exit code carries the answer
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the worker's record file path
    Path {
        /// Worker name
        worker: String,
    },

    /// Claim a worker name by writing our own PID into its record file
    Claim {
        /// Worker name
        worker: String,

        /// Record file to write (default: derived from the worker name)
        #[arg(long)]
        record_path: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct StatusReport<'a> {
    worker: &'a str,
    running: bool,
    record_path: String,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let log_format = std::env::var("PIDGUARD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("Failed to create env filter");

    // Logs go to stderr; stdout carries the command results
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Wire the guard against the real filesystem and process table
fn build_guard(state_dir: &str) -> Result<ProcessGuard> {
    let runtime_dirs = Arc::new(FixedRuntimeDirs::new(state_dir)?);
    let root = runtime_dirs.state_dir()?;

    Ok(ProcessGuard::new(
        Arc::new(FsStateDirectory::new(root)),
        Arc::new(FsWriteFactory),
        runtime_dirs,
        Arc::new(SystemProcessProbe),
        Arc::new(SystemProcessIdentity),
    ))
}

/// Validate a raw worker-name argument into the library's error taxonomy
fn parse_worker(raw: String) -> Result<WorkerName> {
    Ok(WorkerName::new(raw).map_err(GuardError::from)?)
}

fn run(cli: Cli) -> Result<ExitCode> {
    debug!(state_dir = %cli.state_dir, "Using runtime-state directory");
    let guard = build_guard(&cli.state_dir)?;

    match cli.command {
        Commands::Status {
            worker,
            json,
            quiet,
        } => {
            let worker = parse_worker(worker)?;
            let running = guard
                .is_running(&worker)
                .with_context(|| format!("Liveness check for '{worker}' failed"))?;
            let record_path = guard.record_path(&worker)?;

            if json {
                let report = StatusReport {
                    worker: worker.as_str(),
                    running,
                    record_path: record_path.display().to_string(),
                };
                println!("{}", serde_json::to_string(&report)?);
            } else if !quiet {
                if running {
                    println!("{worker}: running");
                } else {
                    println!("{worker}: not running");
                }
            }

            Ok(if running {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Path { worker } => {
            let worker = parse_worker(worker)?;
            println!("{}", guard.record_path(&worker)?.display());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Claim {
            worker,
            record_path,
        } => {
            let worker = parse_worker(worker)?;
            let path = match record_path {
                Some(path) => path,
                None => guard.record_path(&worker)?,
            };

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create state directory {}", parent.display())
                })?;
            }

            guard
                .record_self(&path)
                .with_context(|| format!("Failed to record PID for '{worker}'"))?;

            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
