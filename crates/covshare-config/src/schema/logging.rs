//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Tracing targets of the covshare crates.
const LOG_TARGETS: &[&str] = &[
    "covshare",
    "covshare_config",
    "covshare_layout",
    "covshare_table",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// `EnvFilter` directive scoping this level to the covshare crates.
    pub fn directive(self) -> String {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
