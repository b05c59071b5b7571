use std::time::Duration;

use serde::Deserialize;
use stepdeck::PresenterOptions;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Presentation settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) transition_ms: Option<u64>,
	pub(super) click_to_advance: Option<bool>,
	pub(super) show_progress: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) options: PresenterOptions,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(ms) = cli.transition_ms {
			self.transition_ms = Some(ms);
		}
		if cli.no_click_advance {
			self.click_to_advance = Some(false);
		}
		if cli.hide_progress {
			self.show_progress = Some(false);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut options = PresenterOptions::default();
		if let Some(ms) = self.transition_ms {
			options = options.with_transition(Duration::from_millis(ms));
		}
		if let Some(enabled) = self.click_to_advance {
			options = options.with_click_to_advance(enabled);
		}
		if let Some(visible) = self.show_progress {
			options = options.with_progress(visible);
		}

		UiResolution {
			theme: non_blank(self.theme),
			options,
		}
	}
}
