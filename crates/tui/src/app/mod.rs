//! Presenter state and behaviour.
//!
//! The [`App`] type couples a [`Stepper`](stepdeck_api::Stepper) with the
//! input adapter and the rendering pipeline. Supporting modules split the
//! implementation into input handling and rendering.

mod actions;
pub(crate) mod render;
mod state;

pub use state::{App, PresentationOutcome};
