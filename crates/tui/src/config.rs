use std::time::Duration;

/// Default length of the scene slide animation.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(180);

/// Behavioural switches for a presentation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterOptions {
	/// Length of the slide between scenes. Zero disables the animation.
	pub transition: Duration,
	/// Advance when the stage is clicked.
	pub click_to_advance: bool,
	/// Draw the per-scene progress bar.
	pub show_progress: bool,
}

impl Default for PresenterOptions {
	fn default() -> Self {
		Self {
			transition: DEFAULT_TRANSITION,
			click_to_advance: true,
			show_progress: true,
		}
	}
}

impl PresenterOptions {
	#[must_use]
	pub fn with_transition(mut self, transition: Duration) -> Self {
		self.transition = transition;
		self
	}

	#[must_use]
	pub fn with_click_to_advance(mut self, enabled: bool) -> Self {
		self.click_to_advance = enabled;
		self
	}

	#[must_use]
	pub fn with_progress(mut self, visible: bool) -> Self {
		self.show_progress = visible;
		self
	}
}
