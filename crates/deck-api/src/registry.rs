use indexmap::IndexMap;

use crate::error::DeckError;
use crate::scene::SceneDescriptor;

/// Ordered, immutable collection of the scenes in a deck.
///
/// Insertion order is presentation order. Every registered scene has at least
/// one step, unique id, and blocks that fit within its step count, and the
/// registry itself is never empty.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
	title: String,
	scenes: IndexMap<String, SceneDescriptor>,
}

impl SceneRegistry {
	/// Build a registry from scenes in presentation order.
	pub fn new<I>(title: impl Into<String>, scenes: I) -> Result<Self, DeckError>
	where
		I: IntoIterator<Item = SceneDescriptor>,
	{
		let mut map = IndexMap::new();
		for scene in scenes {
			validate_scene(&scene)?;
			if map.contains_key(scene.id()) {
				return Err(DeckError::DuplicateScene {
					id: scene.id().to_string(),
				});
			}
			map.insert(scene.id().to_string(), scene);
		}

		if map.is_empty() {
			return Err(DeckError::EmptyRegistry);
		}

		Ok(Self {
			title: title.into(),
			scenes: map,
		})
	}

	/// Deck title shown alongside the current scene.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Return the descriptor at `index`.
	pub fn get(&self, index: usize) -> Result<&SceneDescriptor, DeckError> {
		self.scenes
			.get_index(index)
			.map(|(_, scene)| scene)
			.ok_or_else(|| DeckError::out_of_range(index, self.len()))
	}

	/// Total scene count.
	pub fn len(&self) -> usize {
		self.scenes.len()
	}

	/// Always `false`; construction rejects empty decks.
	pub fn is_empty(&self) -> bool {
		self.scenes.is_empty()
	}

	pub fn last_index(&self) -> usize {
		self.len() - 1
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = &SceneDescriptor> + '_ {
		self.scenes.values()
	}

	/// Resolve a scene identifier to its index.
	pub fn position_of(&self, id: &str) -> Option<usize> {
		self.scenes.get_index_of(id)
	}

	/// Number of `(scene, step)` positions across the whole deck.
	pub fn total_positions(&self) -> usize {
		self.iter().map(SceneDescriptor::total_steps).sum()
	}

	/// Linearized position of the first step of `index`.
	pub(crate) fn offset_of(&self, index: usize) -> usize {
		self.iter()
			.take(index)
			.map(SceneDescriptor::total_steps)
			.sum()
	}
}

fn validate_scene(scene: &SceneDescriptor) -> Result<(), DeckError> {
	let steps = scene.total_steps();
	if steps == 0 {
		return Err(DeckError::ZeroSteps {
			id: scene.id().to_string(),
		});
	}

	if let Some(block) = scene.all_blocks().iter().find(|block| block.at >= steps) {
		return Err(DeckError::BlockBeyondSteps {
			id: scene.id().to_string(),
			at: block.at,
			steps,
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scene::{BlockKind, RevealBlock};

	fn scenes(steps: &[usize]) -> Vec<SceneDescriptor> {
		steps
			.iter()
			.enumerate()
			.map(|(index, steps)| {
				SceneDescriptor::new(format!("scene-{index}"), format!("Scene {index}"), *steps)
			})
			.collect()
	}

	#[test]
	fn get_returns_scenes_in_insertion_order() {
		let registry = SceneRegistry::new("Deck", scenes(&[2, 1, 3])).unwrap();

		assert_eq!(registry.len(), 3);
		assert_eq!(registry.get(0).unwrap().id(), "scene-0");
		assert_eq!(registry.get(2).unwrap().total_steps(), 3);
		assert_eq!(registry.position_of("scene-1"), Some(1));
		assert_eq!(registry.total_positions(), 6);
		assert_eq!(registry.offset_of(2), 3);
	}

	#[test]
	fn get_outside_bounds_is_out_of_range() {
		let registry = SceneRegistry::new("Deck", scenes(&[1, 1])).unwrap();

		let err = registry.get(2).unwrap_err();
		assert!(matches!(err, DeckError::OutOfRange { index: 2, len: 2 }));
	}

	#[test]
	fn empty_registry_is_rejected() {
		let err = SceneRegistry::new("Deck", Vec::new()).unwrap_err();
		assert!(matches!(err, DeckError::EmptyRegistry));
	}

	#[test]
	fn zero_step_scene_is_rejected() {
		let err = SceneRegistry::new("Deck", scenes(&[1, 0])).unwrap_err();
		assert!(matches!(err, DeckError::ZeroSteps { ref id } if id == "scene-1"));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = SceneRegistry::new(
			"Deck",
			[
				SceneDescriptor::new("same", "A", 1),
				SceneDescriptor::new("same", "B", 1),
			],
		)
		.unwrap_err();
		assert_eq!(err.to_string(), "scene id 'same' is already registered");
	}

	#[test]
	fn blocks_beyond_last_step_are_rejected() {
		let scene = SceneDescriptor::new("intro", "Intro", 2)
			.block(RevealBlock::new(2, BlockKind::Text, "too late"));

		let err = SceneRegistry::new("Deck", [scene]).unwrap_err();
		assert!(matches!(
			err,
			DeckError::BlockBeyondSteps { at: 2, steps: 2, .. }
		));
	}
}
