use std::env;

use serde::Deserialize;
use stepdeck_tui::{KeyAction, KeyBinding, KeyParseError, Keymap};

use super::super::resolved::{ConfigError, SettingSource};
use super::super::util::sanitize_names;

/// Key names per navigation action. Missing actions keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct KeysSection {
	pub(super) next: Option<Vec<String>>,
	pub(super) previous: Option<Vec<String>>,
	pub(super) first: Option<Vec<String>>,
	pub(super) last: Option<Vec<String>>,
	pub(super) quit: Option<Vec<String>>,
}

impl KeysSection {
	fn names_for(&self, action: KeyAction) -> Option<&Vec<String>> {
		match action {
			KeyAction::Next => self.next.as_ref(),
			KeyAction::Previous => self.previous.as_ref(),
			KeyAction::First => self.first.as_ref(),
			KeyAction::Last => self.last.as_ref(),
			KeyAction::Quit => self.quit.as_ref(),
		}
	}

	/// Parse every configured binding and assemble the keymap.
	pub(super) fn resolve(self) -> Result<Keymap, ConfigError> {
		let mut actions = Vec::with_capacity(KeyAction::ALL.len());
		for action in KeyAction::ALL {
			let bindings = match self.names_for(action) {
				Some(names) => parse_bindings(action, names.clone())?,
				None => action.default_bindings(),
			};
			actions.push((action, bindings));
		}

		Keymap::new(actions).map_err(|err| match &err {
			KeyParseError::Conflict { key, second, .. } => ConfigError::invalid(
				config_key(*second),
				key.clone(),
				source_for(*second),
				err.to_string(),
			),
			_ => ConfigError::invalid(
				"keys",
				String::new(),
				SettingSource::ConfigKey("keys"),
				err.to_string(),
			),
		})
	}
}

fn parse_bindings(action: KeyAction, names: Vec<String>) -> Result<Vec<KeyBinding>, ConfigError> {
	sanitize_names(names)
		.into_iter()
		.map(|name| {
			name.parse::<KeyBinding>().map_err(|err| {
				ConfigError::invalid(
					config_key(action),
					name.clone(),
					source_for(action),
					err.to_string(),
				)
			})
		})
		.collect()
}

fn config_key(action: KeyAction) -> &'static str {
	match action {
		KeyAction::Next => "keys.next",
		KeyAction::Previous => "keys.previous",
		KeyAction::First => "keys.first",
		KeyAction::Last => "keys.last",
		KeyAction::Quit => "keys.quit",
	}
}

fn env_var(action: KeyAction) -> &'static str {
	match action {
		KeyAction::Next => "STEPDECK__KEYS__NEXT",
		KeyAction::Previous => "STEPDECK__KEYS__PREVIOUS",
		KeyAction::First => "STEPDECK__KEYS__FIRST",
		KeyAction::Last => "STEPDECK__KEYS__LAST",
		KeyAction::Quit => "STEPDECK__KEYS__QUIT",
	}
}

fn source_for(action: KeyAction) -> SettingSource {
	let var = env_var(action);
	if env::var_os(var).is_some() {
		SettingSource::Environment(var)
	} else {
		SettingSource::ConfigKey(config_key(action))
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;

	#[test]
	fn unset_actions_keep_default_bindings() {
		let keymap = KeysSection::default().resolve().unwrap();
		let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
		assert_eq!(keymap.action_for(&right), Some(KeyAction::Next));
	}

	#[test]
	fn configured_actions_replace_defaults() {
		let section = KeysSection {
			next: Some(vec!["j".into(), " J ".into()]),
			..KeysSection::default()
		};
		let keymap = section.resolve().unwrap();

		let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
		let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
		assert_eq!(keymap.action_for(&right), None);
		assert_eq!(keymap.action_for(&j), Some(KeyAction::Next));
	}

	#[test]
	fn unknown_key_names_are_reported() {
		let section = KeysSection {
			quit: Some(vec!["hyper+q".into()]),
			..KeysSection::default()
		};
		let err = section.resolve().unwrap_err();

		assert_eq!(err.key, "keys.quit");
		assert_eq!(err.value, "hyper+q");
	}

	#[test]
	fn keys_bound_twice_are_rejected() {
		let section = KeysSection {
			first: Some(vec!["q".into()]),
			..KeysSection::default()
		};
		let err = section.resolve().unwrap_err();

		assert!(err.to_string().contains("bound to both"), "{err}");
	}
}
