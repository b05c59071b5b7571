use anyhow::Result;
use stepdeck_api::{SceneRegistry, Stepper};
use tracing::warn;

use crate::app::{App, PresentationOutcome};
use crate::config::PresenterOptions;
use crate::input::Keymap;
use crate::style::{StyleConfig, Theme};

/// A small builder for configuring and running a presentation.
pub struct Presenter {
	registry: SceneRegistry,
	theme: Option<Theme>,
	options: PresenterOptions,
	keymap: Keymap,
	start_scene: usize,
}

impl Presenter {
	/// Create a presenter for `registry`, starting at its first scene.
	pub fn new(registry: SceneRegistry) -> Self {
		Self {
			registry,
			theme: None,
			options: PresenterOptions::default(),
			keymap: Keymap::default(),
			start_scene: 0,
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a registered theme. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match crate::style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!(theme = name, "unknown theme; keeping the default"),
		}
		self
	}

	pub fn with_options(mut self, options: PresenterOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_keymap(mut self, keymap: Keymap) -> Self {
		self.keymap = keymap;
		self
	}

	/// Open the presentation on the scene at zero-based `index`. Indices
	/// outside the deck are logged and the first scene is used instead.
	pub fn with_start_scene(mut self, index: usize) -> Self {
		self.start_scene = index;
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn into_app(self) -> App {
		let mut stepper = Stepper::new(self.registry);
		if self.start_scene != 0
			&& let Err(err) = stepper.seek(self.start_scene)
		{
			warn!(start_scene = self.start_scene + 1, %err, "ignoring start scene");
		}

		let style = self
			.theme
			.map(StyleConfig::with_theme)
			.unwrap_or_default();

		App::with_parts(stepper, style, self.options, self.keymap)
	}

	/// Take over the terminal and present until the user quits.
	pub fn run(self) -> Result<PresentationOutcome> {
		let mut app = self.into_app();
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use stepdeck_api::SceneDescriptor;

	use super::*;

	fn registry() -> SceneRegistry {
		SceneRegistry::new(
			"Deck",
			[
				SceneDescriptor::new("a", "A", 1),
				SceneDescriptor::new("b", "B", 2),
			],
		)
		.unwrap()
	}

	#[test]
	fn start_scene_positions_the_stepper() {
		let app = Presenter::new(registry())
			.with_start_scene(1)
			.into_app();

		assert_eq!(app.stepper().state().position(), (1, 0));
	}

	#[test]
	fn start_scene_beyond_the_deck_opens_the_first_scene() {
		let app = Presenter::new(registry())
			.with_start_scene(2)
			.into_app();

		assert_eq!(app.stepper().state().position(), (0, 0));
	}

	#[test]
	fn theme_names_resolve_through_the_registry() {
		let app = Presenter::new(registry())
			.with_theme_name("light")
			.into_app();
		assert_eq!(Some(*app.theme()), crate::style::by_name("light"));

		let app = Presenter::new(registry())
			.with_theme_name("no-such-theme")
			.into_app();
		assert_eq!(*app.theme(), Theme::default());
	}
}
