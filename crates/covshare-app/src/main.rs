mod cli;
mod logging;
mod runner;
mod scenario;
mod table_report;

use std::io::Write;
use std::process::ExitCode;

use covshare_common::CovshareError;
use covshare_config::CovshareConfig;

use crate::cli::Command;
use crate::scenario::Scenario;
use crate::table_report::TableRequest;

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let loaded = covshare_config::load_config_from(args.config.as_deref());
    let for_logging = loaded.as_ref().ok().cloned().unwrap_or_default();
    logging::init(&logging::directive(args.log_level.as_deref(), &for_logging));

    tracing::info!("covshare v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CovshareConfig::default()
    });

    match dispatch(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("covshare: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command, config: &CovshareConfig) -> Result<(), CovshareError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Layout { scenario } => {
            let scenario = Scenario::load(&scenario)?;
            for event in runner::run(&scenario, &config.layout)? {
                writeln!(out, "{}", to_json(&event)?)?;
            }
        }
        Command::Table {
            table,
            sort,
            descending,
            width,
        } => {
            let request = TableRequest {
                sort,
                descending,
                width,
            };
            let report = table_report::run(&table, &request, &config.table)?;
            writeln!(out, "{}", to_json(&report)?)?;
        }
        Command::Config => {
            writeln!(out, "{}", covshare_config::config_to_json(config))?;
        }
    }
    Ok(())
}

fn to_json(value: &impl serde::Serialize) -> Result<String, CovshareError> {
    serde_json::to_string(value).map_err(|e| CovshareError::Other(format!("failed to serialize output: {e}")))
}
