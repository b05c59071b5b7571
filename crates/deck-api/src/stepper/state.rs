/// Most recent scene-level navigation direction.
///
/// Only the renderer reads this, to pick a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
	#[default]
	Forward,
	Backward,
}

/// Current position within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepperState {
	pub(super) scene_index: usize,
	pub(super) step: usize,
	pub(super) direction: Direction,
}

impl StepperState {
	pub fn scene_index(&self) -> usize {
		self.scene_index
	}

	pub fn step(&self) -> usize {
		self.step
	}

	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// `(scene_index, step)` pair.
	pub fn position(&self) -> (usize, usize) {
		(self.scene_index, self.step)
	}
}

/// What a navigation call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
	/// Nothing changed.
	Stayed,
	/// The step changed within the same scene.
	Step,
	/// A different scene became current.
	Scene,
}

impl Navigation {
	pub fn moved(self) -> bool {
		!matches!(self, Self::Stayed)
	}

	pub fn changed_scene(self) -> bool {
		matches!(self, Self::Scene)
	}
}
