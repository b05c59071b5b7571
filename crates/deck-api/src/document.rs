//! TOML deck documents.
//!
//! A document carries a deck title and an array of scenes. Each scene lists
//! reveal blocks tagged with the step at which they appear. When a scene omits
//! `steps`, its step count is one past the latest reveal (or one for a scene
//! without blocks).

use serde::Deserialize;

use crate::error::DeckError;
use crate::registry::SceneRegistry;
use crate::scene::{BlockKind, RevealBlock, SceneDescriptor};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckDocument {
	title: String,
	#[serde(default)]
	scenes: Vec<SceneSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneSection {
	id: String,
	title: String,
	#[serde(default)]
	steps: Option<usize>,
	#[serde(default)]
	blocks: Vec<BlockSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockSection {
	#[serde(default)]
	at: usize,
	#[serde(default)]
	kind: BlockKind,
	text: String,
}

impl SceneSection {
	fn into_descriptor(self) -> SceneDescriptor {
		let inferred = self
			.blocks
			.iter()
			.map(|block| block.at + 1)
			.max()
			.unwrap_or(1);
		let steps = self.steps.unwrap_or(inferred);

		SceneDescriptor::new(self.id, self.title, steps).blocks(
			self.blocks
				.into_iter()
				.map(|block| RevealBlock::new(block.at, block.kind, block.text.trim_end())),
		)
	}
}

/// Parse a TOML deck document into a validated registry.
pub fn parse_deck(source: &str) -> Result<SceneRegistry, DeckError> {
	let document: DeckDocument = toml::from_str(source)?;
	SceneRegistry::new(
		document.title,
		document
			.scenes
			.into_iter()
			.map(SceneSection::into_descriptor),
	)
}
