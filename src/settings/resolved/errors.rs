use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, together with where it was supplied.
#[derive(Debug, Error)]
#[error("{key} from {origin} is invalid: {reason}{}", offending(.value))]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	/// Offending value as written by the user, empty when there is none to show.
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

fn offending(value: &str) -> String {
	if value.is_empty() {
		String::new()
	} else {
		format!(" (got `{value}`)")
	}
}
