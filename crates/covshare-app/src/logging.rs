//! Tracing setup. Logs go to stderr so stdout carries only JSON output.

use covshare_config::{CovshareConfig, LogLevel};
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "covshare=info";

/// Filter directive from the command line or, failing that, the config.
///
/// A bare level name on the command line is scoped to the covshare crates;
/// anything else is passed through as a directive.
pub fn directive(cli: Option<&str>, config: &CovshareConfig) -> String {
    match cli.map(str::trim).filter(|s| !s.is_empty()) {
        Some(level) => match parse_level(level) {
            Some(level) => level.directive(),
            None => level.to_string(),
        },
        None => config.logging.level.directive(),
    }
}

fn parse_level(s: &str) -> Option<LogLevel> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

/// `RUST_LOG` wins; otherwise the given directive, or the fallback when it
/// does not parse.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped() {
        let d = directive(Some("DEBUG"), &CovshareConfig::default());
        assert!(d.starts_with("covshare=debug"));
        assert!(d.contains("covshare_layout=debug"));
    }

    #[test]
    fn raw_directive_passes_through() {
        let d = directive(Some("covshare_table=trace"), &CovshareConfig::default());
        assert_eq!(d, "covshare_table=trace");
    }

    #[test]
    fn config_level_is_the_default() {
        let mut config = CovshareConfig::default();
        config.logging.level = LogLevel::Warn;
        assert!(directive(None, &config).starts_with("covshare=warn"));
        assert!(directive(Some("  "), &config).starts_with("covshare=warn"));
    }
}
