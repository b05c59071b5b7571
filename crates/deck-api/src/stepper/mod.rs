//! Presentation controller owning the current `(scene, step)` position.
//!
//! States are the `(scene_index, step)` pairs of every scene linearized in
//! registry order. [`Stepper::advance`] and [`Stepper::retreat`] move one
//! position along that order and stop at either end without wrapping.
//! Retreating across a scene boundary lands on the earlier scene's first step
//! rather than its last. [`Stepper::seek`] jumps to the first step of any
//! scene and rejects indices outside the deck, leaving the state untouched.

mod state;

use tracing::debug;

pub use state::{Direction, Navigation, StepperState};

use crate::error::DeckError;
use crate::registry::SceneRegistry;
use crate::scene::SceneDescriptor;

/// The sole writer of [`StepperState`].
#[derive(Debug, Clone)]
pub struct Stepper {
	registry: SceneRegistry,
	state: StepperState,
}

impl Stepper {
	/// Start a presentation at the first step of the first scene.
	pub fn new(registry: SceneRegistry) -> Self {
		Self {
			registry,
			state: StepperState::default(),
		}
	}

	pub fn registry(&self) -> &SceneRegistry {
		&self.registry
	}

	pub fn state(&self) -> StepperState {
		self.state
	}

	pub fn scene_index(&self) -> usize {
		self.state.scene_index
	}

	pub fn step(&self) -> usize {
		self.state.step
	}

	pub fn direction(&self) -> Direction {
		self.state.direction
	}

	/// Descriptor of the current scene.
	pub fn current_scene(&self) -> &SceneDescriptor {
		self.scene_at(self.state.scene_index)
	}

	/// Linearized index of the current state in `[0, total_positions)`.
	pub fn position(&self) -> usize {
		self.registry.offset_of(self.state.scene_index) + self.state.step
	}

	pub fn is_at_start(&self) -> bool {
		self.state.scene_index == 0 && self.state.step == 0
	}

	pub fn is_at_end(&self) -> bool {
		self.state.scene_index == self.registry.last_index()
			&& self.state.step + 1 == self.current_scene().total_steps()
	}

	/// Move to the next step, or to the first step of the next scene.
	///
	/// A no-op at the final step of the final scene.
	pub fn advance(&mut self) -> Navigation {
		if self.state.step + 1 < self.current_scene().total_steps() {
			self.state.step += 1;
			debug!(scene = self.state.scene_index, step = self.state.step, "advance step");
			return Navigation::Step;
		}

		if self.state.scene_index + 1 < self.registry.len() {
			self.state.scene_index += 1;
			self.state.step = 0;
			self.state.direction = Direction::Forward;
			debug!(scene = self.state.scene_index, "advance scene");
			return Navigation::Scene;
		}

		Navigation::Stayed
	}

	/// Move to the previous step, or to the first step of the previous scene.
	///
	/// A no-op at the first step of the first scene.
	pub fn retreat(&mut self) -> Navigation {
		if self.state.step > 0 {
			self.state.step -= 1;
			debug!(scene = self.state.scene_index, step = self.state.step, "retreat step");
			return Navigation::Step;
		}

		if self.state.scene_index > 0 {
			self.state.scene_index -= 1;
			self.state.step = 0;
			self.state.direction = Direction::Backward;
			debug!(scene = self.state.scene_index, "retreat scene");
			return Navigation::Scene;
		}

		Navigation::Stayed
	}

	/// Jump to the first step of `target`.
	///
	/// Returns [`DeckError::OutOfRange`] without touching the state when
	/// `target` is not a scene index.
	pub fn seek(&mut self, target: usize) -> Result<Navigation, DeckError> {
		if target >= self.registry.len() {
			return Err(DeckError::out_of_range(target, self.registry.len()));
		}

		let previous = self.state;
		self.state.direction = if target > previous.scene_index {
			Direction::Forward
		} else {
			Direction::Backward
		};
		self.state.scene_index = target;
		self.state.step = 0;
		debug!(from = previous.scene_index, scene = target, "seek");

		Ok(if target != previous.scene_index {
			Navigation::Scene
		} else if previous.step != 0 {
			Navigation::Step
		} else {
			Navigation::Stayed
		})
	}

	fn scene_at(&self, index: usize) -> &SceneDescriptor {
		match self.registry.get(index) {
			Ok(scene) => scene,
			Err(err) => unreachable!("stepper state escaped the registry: {err}"),
		}
	}
}
