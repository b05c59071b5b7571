//! Deck model and navigation for `stepdeck`.
//!
//! A deck is a [`SceneRegistry`]: an ordered, immutable list of
//! [`SceneDescriptor`]s, each revealing its content over one or more steps.
//! The [`Stepper`] owns the current position within a registry and is the
//! only way to change it.

pub mod document;
pub mod error;
pub mod registry;
pub mod scene;
pub mod stepper;

pub use document::parse_deck;
pub use error::DeckError;
pub use registry::SceneRegistry;
pub use scene::{BlockKind, RevealBlock, SceneDescriptor};
pub use stepper::{Direction, Navigation, Stepper, StepperState};
