mod builtins;
mod registry;
mod types;

pub use builtins::{default_theme, themes as builtin_themes};
pub use registry::{by_name, names};
pub use types::{NamedTheme, Theme};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
