use serde::Deserialize;

/// Presentation style of a [`RevealBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
	Heading,
	#[default]
	Text,
	Bullet,
	Code,
	Note,
}

/// A piece of scene content that becomes visible once the scene reaches a
/// given step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBlock {
	/// First step at which the block is visible.
	pub at: usize,
	pub kind: BlockKind,
	pub text: String,
}

impl RevealBlock {
	pub fn new(at: usize, kind: BlockKind, text: impl Into<String>) -> Self {
		Self {
			at,
			kind,
			text: text.into(),
		}
	}

	/// Returns `true` when the block is revealed at `step`.
	#[must_use]
	pub fn is_visible_at(&self, step: usize) -> bool {
		step >= self.at
	}
}

/// One unit of presentation content with its own reveal steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDescriptor {
	id: String,
	title: String,
	total_steps: usize,
	blocks: Vec<RevealBlock>,
}

impl SceneDescriptor {
	/// Create a scene without content. Validation happens when the scene is
	/// added to a [`SceneRegistry`](crate::SceneRegistry).
	pub fn new(id: impl Into<String>, title: impl Into<String>, total_steps: usize) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			total_steps,
			blocks: Vec::new(),
		}
	}

	/// Append a reveal block.
	pub fn block(mut self, block: RevealBlock) -> Self {
		self.blocks.push(block);
		self
	}

	/// Append multiple reveal blocks.
	pub fn blocks<I>(mut self, blocks: I) -> Self
	where
		I: IntoIterator<Item = RevealBlock>,
	{
		self.blocks.extend(blocks);
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// Number of discrete reveal states, always at least one once registered.
	pub fn total_steps(&self) -> usize {
		self.total_steps
	}

	pub fn all_blocks(&self) -> &[RevealBlock] {
		&self.blocks
	}

	/// Blocks visible at `step`, in authored order.
	pub fn visible_blocks(&self, step: usize) -> impl Iterator<Item = &RevealBlock> + '_ {
		self.blocks
			.iter()
			.filter(move |block| block.is_visible_at(step))
	}
}
