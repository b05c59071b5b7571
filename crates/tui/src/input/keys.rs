use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Navigation intent bound to one or more keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
	Next,
	Previous,
	First,
	Last,
	Quit,
}

impl KeyAction {
	pub const ALL: [KeyAction; 5] = [
		KeyAction::Next,
		KeyAction::Previous,
		KeyAction::First,
		KeyAction::Last,
		KeyAction::Quit,
	];

	/// Configuration key naming this action.
	pub fn id(self) -> &'static str {
		match self {
			Self::Next => "next",
			Self::Previous => "previous",
			Self::First => "first",
			Self::Last => "last",
			Self::Quit => "quit",
		}
	}

	/// Bindings used when the configuration does not override the action.
	pub fn default_bindings(self) -> Vec<KeyBinding> {
		let names: &[&str] = match self {
			Self::Next => &["right", "space", "enter", "l", "pagedown"],
			Self::Previous => &["left", "backspace", "h", "pageup"],
			Self::First => &["home"],
			Self::Last => &["end"],
			Self::Quit => &["q", "esc", "ctrl+c"],
		};
		names
			.iter()
			.filter_map(|name| name.parse().ok())
			.collect()
	}
}

impl fmt::Display for KeyAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Errors raised while parsing key names or assembling a [`Keymap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
	#[error("key binding is empty")]
	Empty,
	#[error("unknown key `{0}`")]
	UnknownKey(String),
	#[error("unknown modifier `{0}`")]
	UnknownModifier(String),
	#[error("key `{key}` is bound to both `{first}` and `{second}`")]
	Conflict {
		key: String,
		first: KeyAction,
		second: KeyAction,
	},
}

/// A key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
	code: KeyCode,
	modifiers: KeyModifiers,
}

impl KeyBinding {
	pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
		Self { code, modifiers }
	}

	/// Normalise an incoming event so it can be looked up in a [`Keymap`].
	///
	/// Terminals report shifted characters with `SHIFT` set, so the flag is
	/// dropped for character keys.
	fn from_event(event: &KeyEvent) -> Self {
		let mut modifiers = event.modifiers;
		if matches!(event.code, KeyCode::Char(_)) {
			modifiers.remove(KeyModifiers::SHIFT);
		}
		Self::new(event.code, modifiers)
	}
}

impl FromStr for KeyBinding {
	type Err = KeyParseError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let trimmed = input.trim();
		if trimmed.is_empty() {
			return Err(KeyParseError::Empty);
		}

		// A lone "+" is a key, not a separator.
		let (modifier_part, key_part) = match trimmed.rsplit_once('+') {
			Some((mods, key)) if !key.is_empty() => (Some(mods), key),
			_ => (None, trimmed),
		};

		let mut modifiers = KeyModifiers::NONE;
		if let Some(mods) = modifier_part {
			for modifier in mods.split('+') {
				modifiers |= match modifier.trim().to_ascii_lowercase().as_str() {
					"ctrl" | "control" => KeyModifiers::CONTROL,
					"alt" | "meta" => KeyModifiers::ALT,
					"shift" => KeyModifiers::SHIFT,
					other => return Err(KeyParseError::UnknownModifier(other.to_string())),
				};
			}
		}

		let code = parse_key_code(key_part.trim())?;
		if matches!(code, KeyCode::Char(_)) {
			modifiers.remove(KeyModifiers::SHIFT);
		}

		Ok(Self::new(code, modifiers))
	}
}

fn parse_key_code(name: &str) -> Result<KeyCode, KeyParseError> {
	let mut chars = name.chars();
	if let (Some(ch), None) = (chars.next(), chars.next()) {
		return Ok(KeyCode::Char(ch));
	}

	let normalized = name.trim().to_ascii_lowercase().replace(['-', '_'], "");
	let code = match normalized.as_str() {
		"right" => KeyCode::Right,
		"left" => KeyCode::Left,
		"up" => KeyCode::Up,
		"down" => KeyCode::Down,
		"space" => KeyCode::Char(' '),
		"enter" | "return" => KeyCode::Enter,
		"esc" | "escape" => KeyCode::Esc,
		"tab" => KeyCode::Tab,
		"backspace" => KeyCode::Backspace,
		"delete" | "del" => KeyCode::Delete,
		"home" => KeyCode::Home,
		"end" => KeyCode::End,
		"pageup" | "pgup" => KeyCode::PageUp,
		"pagedown" | "pgdn" => KeyCode::PageDown,
		other => {
			if let Some(number) = other.strip_prefix('f')
				&& let Ok(number) = number.parse::<u8>()
				&& (1..=12).contains(&number)
			{
				KeyCode::F(number)
			} else {
				return Err(KeyParseError::UnknownKey(name.to_string()));
			}
		}
	};
	Ok(code)
}

impl fmt::Display for KeyBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.contains(KeyModifiers::CONTROL) {
			f.write_str("ctrl+")?;
		}
		if self.modifiers.contains(KeyModifiers::ALT) {
			f.write_str("alt+")?;
		}
		if self.modifiers.contains(KeyModifiers::SHIFT) {
			f.write_str("shift+")?;
		}
		match self.code {
			KeyCode::Char(' ') => f.write_str("space"),
			KeyCode::Char(ch) => write!(f, "{ch}"),
			KeyCode::F(number) => write!(f, "f{number}"),
			KeyCode::Right => f.write_str("right"),
			KeyCode::Left => f.write_str("left"),
			KeyCode::Up => f.write_str("up"),
			KeyCode::Down => f.write_str("down"),
			KeyCode::Enter => f.write_str("enter"),
			KeyCode::Esc => f.write_str("esc"),
			KeyCode::Tab => f.write_str("tab"),
			KeyCode::Backspace => f.write_str("backspace"),
			KeyCode::Delete => f.write_str("delete"),
			KeyCode::Home => f.write_str("home"),
			KeyCode::End => f.write_str("end"),
			KeyCode::PageUp => f.write_str("pageup"),
			KeyCode::PageDown => f.write_str("pagedown"),
			other => write!(f, "{other:?}"),
		}
	}
}

/// Lookup table from key bindings to navigation actions.
#[derive(Debug, Clone)]
pub struct Keymap {
	bindings: HashMap<KeyBinding, KeyAction>,
}

impl Keymap {
	/// Build a keymap, rejecting keys claimed by more than one action.
	pub fn new<I, B>(actions: I) -> Result<Self, KeyParseError>
	where
		I: IntoIterator<Item = (KeyAction, B)>,
		B: IntoIterator<Item = KeyBinding>,
	{
		let mut bindings = HashMap::new();
		for (action, keys) in actions {
			for key in keys {
				match bindings.insert(key, action) {
					Some(first) if first != action => {
						return Err(KeyParseError::Conflict {
							key: key.to_string(),
							first,
							second: action,
						});
					}
					_ => {}
				}
			}
		}
		Ok(Self { bindings })
	}

	/// Resolve a key event to its action, if any.
	pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
		self.bindings.get(&KeyBinding::from_event(event)).copied()
	}

	/// Bindings for `action`, sorted for display.
	pub fn bindings_for(&self, action: KeyAction) -> Vec<KeyBinding> {
		let mut keys: Vec<_> = self
			.bindings
			.iter()
			.filter(|(_, bound)| **bound == action)
			.map(|(key, _)| *key)
			.collect();
		keys.sort_by_key(ToString::to_string);
		keys
	}
}

impl Default for Keymap {
	fn default() -> Self {
		Self::new(
			KeyAction::ALL
				.into_iter()
				.map(|action| (action, action.default_bindings())),
		)
		.unwrap_or_else(|err| unreachable!("default keymap is consistent: {err}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	#[test]
	fn parses_named_keys_and_modifiers() {
		assert_eq!(
			"ctrl+c".parse::<KeyBinding>().unwrap(),
			KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
		);
		assert_eq!(
			"Page_Down".parse::<KeyBinding>().unwrap(),
			KeyBinding::new(KeyCode::PageDown, KeyModifiers::NONE)
		);
		assert_eq!(
			"space".parse::<KeyBinding>().unwrap(),
			KeyBinding::new(KeyCode::Char(' '), KeyModifiers::NONE)
		);
		assert_eq!(
			"f5".parse::<KeyBinding>().unwrap(),
			KeyBinding::new(KeyCode::F(5), KeyModifiers::NONE)
		);
		assert_eq!(
			"+".parse::<KeyBinding>().unwrap(),
			KeyBinding::new(KeyCode::Char('+'), KeyModifiers::NONE)
		);
	}

	#[test]
	fn rejects_unknown_names() {
		assert_eq!(
			"hyper+x".parse::<KeyBinding>().unwrap_err(),
			KeyParseError::UnknownModifier("hyper".into())
		);
		assert_eq!(
			"launch".parse::<KeyBinding>().unwrap_err(),
			KeyParseError::UnknownKey("launch".into())
		);
		assert_eq!(" ".parse::<KeyBinding>().unwrap_err(), KeyParseError::Empty);
	}

	#[test]
	fn display_round_trips_through_parse() {
		for name in ["ctrl+c", "space", "pagedown", "f12", "q", "alt+left"] {
			let binding: KeyBinding = name.parse().unwrap();
			assert_eq!(binding.to_string(), name);
		}
	}

	#[test]
	fn default_keymap_covers_navigation_keys() {
		let keymap = Keymap::default();

		let cases = [
			(KeyCode::Right, KeyAction::Next),
			(KeyCode::Char(' '), KeyAction::Next),
			(KeyCode::Enter, KeyAction::Next),
			(KeyCode::Left, KeyAction::Previous),
			(KeyCode::Home, KeyAction::First),
			(KeyCode::End, KeyAction::Last),
			(KeyCode::Esc, KeyAction::Quit),
		];
		for (code, action) in cases {
			assert_eq!(
				keymap.action_for(&press(code, KeyModifiers::NONE)),
				Some(action),
				"{code:?}"
			);
		}

		assert_eq!(
			keymap.action_for(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
			Some(KeyAction::Quit)
		);
		assert_eq!(keymap.action_for(&press(KeyCode::Char('x'), KeyModifiers::NONE)), None);
		assert_eq!(keymap.action_for(&press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
	}

	#[test]
	fn shifted_characters_match_plain_bindings() {
		let keymap = Keymap::default();
		assert_eq!(
			keymap.action_for(&press(KeyCode::Char('L'), KeyModifiers::SHIFT)),
			None
		);
		assert_eq!(
			keymap.action_for(&press(KeyCode::Char('l'), KeyModifiers::SHIFT)),
			Some(KeyAction::Next)
		);
	}

	#[test]
	fn conflicting_bindings_are_rejected() {
		let right: KeyBinding = "right".parse().unwrap();
		let err = Keymap::new([
			(KeyAction::Next, vec![right]),
			(KeyAction::Last, vec![right]),
		])
		.unwrap_err();

		assert_eq!(
			err.to_string(),
			"key `right` is bound to both `next` and `last`"
		);
	}

	#[test]
	fn bindings_for_lists_sorted_keys() {
		let keymap = Keymap::default();
		let names: Vec<String> = keymap
			.bindings_for(KeyAction::Quit)
			.iter()
			.map(ToString::to_string)
			.collect();
		assert_eq!(names, vec!["ctrl+c", "esc", "q"]);
	}
}
