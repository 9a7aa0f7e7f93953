use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Picks the filter in effect: `RUST_LOG` when set and non-empty, the
/// configured level otherwise. Returns the directives alongside the filter.
pub fn resolve_filter(
    rust_log: Option<&str>,
    configured_level: &str,
) -> Result<(String, EnvFilter)> {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => {
            let filter = EnvFilter::try_new(directives).map_err(|e| {
                Error::config(format!("Invalid RUST_LOG value '{}': {}", directives, e))
            })?;
            Ok((directives.to_string(), filter))
        }
        None => {
            validate_log_level(configured_level)?;
            Ok((configured_level.to_string(), EnvFilter::new(configured_level)))
        }
    }
}

pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt().with_env_filter(filter).json().init();
}
