use thiserror::Error;

/// Errors produced while building a [`SceneRegistry`](crate::SceneRegistry) or
/// navigating a [`Stepper`](crate::Stepper).
#[derive(Debug, Error)]
pub enum DeckError {
	/// A scene index fell outside `[0, len)`.
	#[error("scene index {index} is out of range for a deck of {len} scenes")]
	OutOfRange { index: usize, len: usize },

	/// A registry was built without any scenes.
	#[error("a deck must contain at least one scene")]
	EmptyRegistry,

	/// A scene declared zero reveal steps.
	#[error("scene '{id}' must declare at least one step")]
	ZeroSteps { id: String },

	/// Two scenes share the same identifier.
	#[error("scene id '{id}' is already registered")]
	DuplicateScene { id: String },

	/// A reveal block targets a step the scene does not have.
	#[error("scene '{id}' has a block revealed at step {at} but only {steps} steps")]
	BlockBeyondSteps { id: String, at: usize, steps: usize },

	/// The deck document could not be parsed.
	#[error("failed to parse deck document: {0}")]
	Parse(#[from] toml::de::Error),
}

impl DeckError {
	pub fn out_of_range(index: usize, len: usize) -> Self {
		Self::OutOfRange { index, len }
	}
}
