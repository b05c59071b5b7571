//! Deck loading: built-in decks embedded in the binary and TOML files on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use include_dir::{Dir, include_dir};
use stepdeck_api::{SceneRegistry, parse_deck};
use tracing::debug;

static BUILTIN_DECK_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/decks");

/// Deck shown when neither a path nor a built-in is configured.
pub const DEFAULT_DECK: &str = "agent-skills";

/// Where a presentation's deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
	Path(PathBuf),
	Builtin(String),
}

impl Default for DeckSource {
	fn default() -> Self {
		Self::Builtin(DEFAULT_DECK.to_string())
	}
}

impl fmt::Display for DeckSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path(path) => write!(f, "{}", path.display()),
			Self::Builtin(name) => write!(f, "builtin:{name}"),
		}
	}
}

impl DeckSource {
	pub fn load(&self) -> Result<SceneRegistry> {
		match self {
			Self::Path(path) => load_path(path),
			Self::Builtin(name) => builtin(name),
		}
	}
}

/// Names of the embedded decks, sorted.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILTIN_DECK_DIR
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.filter_map(|file| file.path().file_stem()?.to_str())
		.collect();
	names.sort_unstable();
	names
}

/// Load an embedded deck by case-insensitive name.
pub fn builtin(name: &str) -> Result<SceneRegistry> {
	let wanted = name.trim().to_ascii_lowercase();
	let Some(file) = BUILTIN_DECK_DIR.get_file(format!("{wanted}.toml")) else {
		bail!(
			"unknown built-in deck `{name}` (available: {})",
			builtin_names().join(", ")
		);
	};
	let source = file
		.contents_utf8()
		.with_context(|| format!("built-in deck `{wanted}` is not valid UTF-8"))?;
	debug!(deck = %wanted, "loading built-in deck");
	parse_deck(source).with_context(|| format!("failed to parse built-in deck `{wanted}`"))
}

/// Read and parse a deck document from disk.
pub fn load_path(path: &Path) -> Result<SceneRegistry> {
	let source = fs::read_to_string(path)
		.with_context(|| format!("failed to read deck {}", path.display()))?;
	debug!(path = %path.display(), "loading deck file");
	parse_deck(&source).with_context(|| format!("failed to parse deck {}", path.display()))
}

/// Render a plain-text outline: one line per scene with its step count.
#[must_use]
pub fn outline(registry: &SceneRegistry) -> String {
	let mut text = format!("{}\n", registry.title());
	let width = registry.len().to_string().len();
	for (index, scene) in registry.iter().enumerate() {
		let steps = scene.total_steps();
		let noun = if steps == 1 { "step" } else { "steps" };
		text.push_str(&format!(
			"{:>width$}. {} [{}] ({steps} {noun})\n",
			index + 1,
			scene.title(),
			scene.id(),
		));
	}
	text
}
