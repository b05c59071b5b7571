//! Interactive terminal presenter for `stepdeck`.
//!
//! This crate contains the presenter application: the builder, event loop,
//! input adapter, rendering pipeline, and the themes that style it.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, PresentationOutcome};
pub use builder::Presenter;
pub use config::{DEFAULT_TRANSITION, PresenterOptions};
pub use runtime::run;

pub use crate::input::{InputAdapter, KeyAction, KeyBinding, KeyParseError, Keymap, NavCommand};
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
