use ratatui::style::{Color, Modifier, Style};

/// Colour scheme for every element of the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Deck title and scene counter line.
	pub header: Style,
	/// Stage border and scene title.
	pub border: Style,
	/// Heading blocks.
	pub heading: Style,
	/// Plain text and bullet blocks.
	pub text: Style,
	/// Code blocks.
	pub code: Style,
	/// Speaker-note style asides.
	pub note: Style,
	/// Progress segments of scenes already shown.
	pub progress_done: Style,
	/// Progress segment of the current scene and revealed step dots.
	pub progress_current: Style,
	/// Progress segments of upcoming scenes and pending step dots.
	pub progress_pending: Style,
	/// Hover tooltip above the progress bar.
	pub tooltip: Style,
}

impl Theme {
	/// Style for the bullet glyph preceding bullet blocks.
	#[must_use]
	pub fn bullet_marker_style(&self) -> Style {
		self.text
			.fg(self.heading.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Style for the scene title embedded in the stage border.
	#[must_use]
	pub fn scene_title_style(&self) -> Style {
		self.border.add_modifier(Modifier::BOLD)
	}
}

/// A built-in theme together with the names it answers to.
#[derive(Debug, Clone)]
pub struct NamedTheme {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}

impl NamedTheme {
	/// Whether `name` is this theme's name or one of its aliases, ignoring
	/// case and surrounding whitespace.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = name.trim();
		self.name.eq_ignore_ascii_case(wanted)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(wanted))
	}
}
