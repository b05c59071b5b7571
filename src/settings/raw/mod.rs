use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::non_blank;

mod deck;
mod keys;
mod ui;

use deck::DeckSection;
use keys::KeysSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	deck: DeckSection,
	ui: UiSection,
	keys: KeysSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.deck.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			start_scene: detect_source(
				cli.start_scene.is_some(),
				self.deck.start_scene.is_some(),
				"STEPDECK__DECK__START_SCENE",
				"--start-scene",
				"deck.start_scene",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"STEPDECK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"STEPDECK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let (deck, start_scene) = self.deck.resolve().map_err(Error::new)?;
		let keymap = self.keys.resolve().map_err(Error::new)?;
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			deck,
			start_scene,
			theme: ui.theme,
			options: ui.options,
			keymap,
			log_level: non_blank(self.logging.level)
				.unwrap_or_else(|| stepdeck::logging::DEFAULT_LEVEL.to_string()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

pub(super) fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
