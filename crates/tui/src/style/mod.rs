//! Visual styling utilities.
//!
//! Themes hold the colour scheme for the presenter. They ship as TOML
//! definitions embedded in the crate and are looked up by name or alias.

pub mod theme;

pub use theme::{NamedTheme, Theme, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
