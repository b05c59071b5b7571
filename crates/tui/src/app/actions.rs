use std::time::Instant;

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use stepdeck_api::Navigation;
use tracing::{debug, warn};

use super::{App, PresentationOutcome};
use crate::components::Transition;
use crate::input::NavCommand;

impl App {
	/// Process a keyboard event and return an outcome if the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PresentationOutcome> {
		let command = self.input.translate_key(&key)?;
		self.apply(command, Instant::now())
	}

	/// Process a mouse event: hover, stage clicks, and progress seeking.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PresentationOutcome> {
		let command = self.input.translate_mouse(mouse, &self.hit_areas)?;
		self.apply(command, Instant::now())
	}

	/// Run `command` against the stepper, starting a transition on scene
	/// changes. Returns an outcome only for [`NavCommand::Quit`].
	pub(crate) fn apply(
		&mut self,
		command: NavCommand,
		now: Instant,
	) -> Option<PresentationOutcome> {
		let navigation = match command {
			NavCommand::Advance => self.stepper.advance(),
			NavCommand::Retreat => self.stepper.retreat(),
			NavCommand::Seek(target) => self.seek(target),
			NavCommand::First => self.seek(0),
			NavCommand::Last => self.seek(self.stepper.registry().last_index()),
			NavCommand::Quit => {
				let outcome = self.outcome();
				debug!(?outcome, "presentation closed");
				return Some(outcome);
			}
		};

		if navigation.changed_scene() && !self.options.transition.is_zero() {
			self.transition = Some(Transition::new(
				self.stepper.direction(),
				now,
				self.options.transition,
			));
		}
		None
	}

	fn seek(&mut self, target: usize) -> Navigation {
		match self.stepper.seek(target) {
			Ok(navigation) => navigation,
			Err(err) => {
				warn!(target, %err, "ignoring seek request");
				Navigation::Stayed
			}
		}
	}

	/// Whether the screen needs redrawing for an animation frame.
	pub(crate) fn is_animating(&self) -> bool {
		self.transition.is_some()
	}
}
