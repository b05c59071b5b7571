//! Themes compiled into the binary.

mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use loader::{ThemeSet, load_theme_set};

use crate::style::theme::types::{NamedTheme, Theme};

const THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// The theme marked `default = true`, or the first one by file name.
pub fn default_theme() -> Theme {
	theme_set().default_theme
}

/// Every bundled theme, ordered by file name.
pub fn themes() -> &'static [NamedTheme] {
	&theme_set().themes
}

fn theme_set() -> &'static ThemeSet {
	static THEMES: OnceLock<ThemeSet> = OnceLock::new();
	// The files are embedded at build time and covered by the loader tests.
	THEMES.get_or_init(|| {
		load_theme_set(&THEME_DIR)
			.unwrap_or_else(|error| panic!("bundled themes are malformed: {error:#}"))
	})
}
