//! File-backed `tracing` setup.
//!
//! The presenter owns the terminal, so log lines are written to
//! `<data dir>/stepdeck.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::app_dirs;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "STEPDECK_LOG";
pub const LOG_FILE_NAME: &str = "stepdeck.log";
pub const DEFAULT_LEVEL: &str = "info";

/// Levels accepted by `--log-level` and `logging.level`.
pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Returns `true` for a level in [`LEVELS`], ignoring case.
#[must_use]
pub fn is_valid_level(level: &str) -> bool {
	LEVELS
		.iter()
		.any(|known| known.eq_ignore_ascii_case(level.trim()))
}

/// Build the filter: `STEPDECK_LOG` wins over the configured `level`.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
		return Ok(filter);
	}
	EnvFilter::try_new(level.trim().to_ascii_lowercase())
		.with_context(|| format!("invalid log level `{level}`"))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is switched off.
pub fn initialize(level: &str) -> Result<Option<PathBuf>> {
	if level.trim().eq_ignore_ascii_case("off") && std::env::var_os(LOG_ENV).is_none() {
		return Ok(None);
	}

	let filter = filter_for(level)?;
	let dir = app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(Some(path))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_are_case_insensitive() {
		assert!(is_valid_level("DEBUG"));
		assert!(is_valid_level(" off "));
		assert!(!is_valid_level("verbose"));
	}

	#[test]
	fn configured_level_builds_a_filter() {
		assert!(filter_for("warn").is_ok());
	}
}
