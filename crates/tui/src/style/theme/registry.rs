use super::builtins;
use super::types::Theme;

/// Look up a bundled theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::themes()
		.iter()
		.find(|entry| entry.answers_to(name))
		.map(|entry| entry.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtins::themes()
		.iter()
		.map(|entry| entry.name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}
