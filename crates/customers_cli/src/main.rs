//! CLI entry point for the customers demo.
//!
//! # Responsibility
//! - Bootstrap logging and an in-memory database.
//! - Run the reference seed-and-query sequence, logging each match.
//!
//! # Environment
//! - `CUSTOMERS_LOG_LEVEL`: trace|debug|info|warn|error (build-mode default).
//! - `CUSTOMERS_LOG_DIR`: absolute directory for rolling log files; stderr when unset.

use customers_core::{DataSeeder, LogSink, SeedPlan};
use log::error;
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "CUSTOMERS_LOG_LEVEL";
const LOG_DIR_ENV: &str = "CUSTOMERS_LOG_DIR";

fn main() -> ExitCode {
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| customers_core::default_log_level().to_string());
    let log_dir = std::env::var(LOG_DIR_ENV).ok();

    if let Err(err) = customers_core::init_logging(&level, log_dir.as_deref()) {
        eprintln!("customers: logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=seed_run module=cli status=error error={err}");
            eprintln!("customers: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = customers_core::open_db_in_memory()?;
    DataSeeder::new(&conn).run(&SeedPlan::default(), &mut LogSink)?;
    Ok(())
}
