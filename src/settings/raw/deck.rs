use std::path::PathBuf;

use serde::Deserialize;
use stepdeck::DeckSource;

use super::super::resolved::{ConfigError, SettingSource};
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Which deck to present and where to start.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DeckSection {
	pub(super) path: Option<PathBuf>,
	pub(super) builtin: Option<String>,
	pub(super) start_scene: Option<usize>,
}

impl DeckSection {
	/// A deck named on the command line replaces both configured choices.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.deck.clone() {
			self.path = Some(path);
			self.builtin = None;
		}
		if let Some(name) = cli.builtin.clone() {
			self.builtin = Some(name);
			self.path = None;
		}
		if let Some(scene) = cli.start_scene {
			self.start_scene = Some(scene);
		}
	}

	/// Pick the deck source and the 1-based start scene.
	pub(super) fn resolve(self) -> Result<(DeckSource, usize), ConfigError> {
		let start_scene = self.start_scene.unwrap_or(1);
		let source = match (self.path, non_blank(self.builtin)) {
			(Some(path), Some(builtin)) => {
				return Err(ConfigError::invalid(
					"deck.builtin",
					builtin,
					SettingSource::ConfigKey("deck.builtin"),
					format!("cannot be combined with deck.path ({})", path.display()),
				));
			}
			(Some(path), None) => DeckSource::Path(path),
			(None, Some(builtin)) => DeckSource::Builtin(builtin),
			(None, None) => DeckSource::default(),
		};
		Ok((source, start_scene))
	}
}
