//! Terminal presentation stepper.
//!
//! The root crate wires deck loading, logging, and directory discovery around
//! the model in [`stepdeck_api`] and the presenter in [`stepdeck_tui`].

pub mod app_dirs;
pub mod decks;
pub mod logging;

pub use decks::DeckSource;
pub use stepdeck_api::{
	BlockKind, DeckError, Direction, Navigation, RevealBlock, SceneDescriptor, SceneRegistry,
	Stepper, StepperState, parse_deck,
};
pub use stepdeck_tui::{
	Keymap, PresentationOutcome, Presenter, PresenterOptions, Theme, builtin_themes, default_theme,
};

/// Themes registered with the presenter.
pub mod theme {
	pub use stepdeck_tui::style::{NamedTheme, by_name, names};
}
