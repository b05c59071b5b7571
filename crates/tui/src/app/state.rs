//! Core state container for a running presentation.

use stepdeck_api::{Stepper, StepperState};

use crate::components::Transition;
use crate::config::PresenterOptions;
use crate::input::{HitAreas, InputAdapter, Keymap};
use crate::style::{StyleConfig, Theme};

/// How a presentation session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOutcome {
	/// Position the stepper held when the session ended.
	pub final_state: StepperState,
	/// `true` when the last step of the last scene had been reached.
	pub completed: bool,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) stepper: Stepper,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) options: PresenterOptions,
	pub(crate) input: InputAdapter,
	pub(crate) hit_areas: HitAreas,
	pub(crate) transition: Option<Transition>,
}

impl App {
	/// Construct an [`App`] with the default theme, options, and keymap.
	pub fn new(stepper: Stepper) -> Self {
		Self::with_parts(
			stepper,
			StyleConfig::default(),
			PresenterOptions::default(),
			Keymap::default(),
		)
	}

	pub(crate) fn with_parts(
		stepper: Stepper,
		style: StyleConfig,
		options: PresenterOptions,
		keymap: Keymap,
	) -> Self {
		let input = InputAdapter::new(keymap, options.click_to_advance);
		Self {
			stepper,
			style,
			options,
			input,
			hit_areas: HitAreas::default(),
			transition: None,
		}
	}

	pub fn stepper(&self) -> &Stepper {
		&self.stepper
	}

	pub fn theme(&self) -> &Theme {
		&self.style.theme
	}

	pub fn options(&self) -> PresenterOptions {
		self.options
	}

	/// Snapshot of the session as it stands now.
	pub fn outcome(&self) -> PresentationOutcome {
		PresentationOutcome {
			final_state: self.stepper.state(),
			completed: self.stepper.is_at_end(),
		}
	}
}
