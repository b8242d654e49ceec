use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// covshare: drive the split-pane layout engine and the data table from
/// scenario files.
#[derive(Parser, Debug)]
#[command(name = "covshare", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Mount the containers of a scenario, replay its steps and print every
    /// layout event as a JSON line.
    Layout {
        /// Scenario TOML file.
        scenario: PathBuf,
    },
    /// Load a JSON table, sort and measure it, and print the result.
    Table {
        /// Table JSON file with `columns` and `rows`.
        table: PathBuf,

        /// Column key to sort on.
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending.
        #[arg(long)]
        descending: bool,

        /// Header width in pixels.
        #[arg(long, default_value_t = 800.0)]
        width: f64,
    },
    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
