//! Translation of terminal input into navigation commands.
//!
//! The [`InputAdapter`] owns the keymap and the transient pointer state
//! (drag-in-progress and hovered progress segment). It never touches the
//! stepper directly; callers apply the returned [`NavCommand`]s.

mod keys;
mod pointer;

use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub use keys::{KeyAction, KeyBinding, KeyParseError, Keymap};
pub use pointer::SeekGesture;

use crate::components::{point_in_rect, scene_at_column};

/// A request for the stepper produced from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
	Advance,
	Retreat,
	Seek(usize),
	First,
	Last,
	Quit,
}

impl From<KeyAction> for NavCommand {
	fn from(action: KeyAction) -> Self {
		match action {
			KeyAction::Next => Self::Advance,
			KeyAction::Previous => Self::Retreat,
			KeyAction::First => Self::First,
			KeyAction::Last => Self::Last,
			KeyAction::Quit => Self::Quit,
		}
	}
}

/// Screen regions the pointer can interact with, as laid out by the last draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
	pub stage: Option<Rect>,
	pub progress: Option<Rect>,
	pub scene_count: usize,
}

impl HitAreas {
	fn progress_target(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.progress?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		scene_at_column(area, self.scene_count, column)
	}

	fn stage_contains(&self, column: u16, row: u16) -> bool {
		self.stage
			.is_some_and(|area| point_in_rect(column, row, area))
	}
}

#[derive(Debug, Clone)]
pub struct InputAdapter {
	keymap: Keymap,
	click_to_advance: bool,
	gesture: SeekGesture,
	hovered: Option<usize>,
}

impl InputAdapter {
	pub fn new(keymap: Keymap, click_to_advance: bool) -> Self {
		Self {
			keymap,
			click_to_advance,
			gesture: SeekGesture::default(),
			hovered: None,
		}
	}

	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	/// Scene whose progress segment is under the pointer.
	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	pub fn is_dragging(&self) -> bool {
		self.gesture.is_dragging()
	}

	/// Map a key event to a command. Releases, repeats, and unbound keys are
	/// ignored.
	pub fn translate_key(&self, key: &KeyEvent) -> Option<NavCommand> {
		if key.kind != KeyEventKind::Press {
			return None;
		}
		self.keymap.action_for(key).map(NavCommand::from)
	}

	/// Map a mouse event to a command, updating hover and drag state.
	///
	/// While a drag is in progress the hovered scene follows the seek target,
	/// even when the pointer leaves the progress bar.
	pub fn translate_mouse(&mut self, mouse: MouseEvent, areas: &HitAreas) -> Option<NavCommand> {
		let over_bar = areas.progress_target(mouse.column, mouse.row);

		let command = match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(target) = over_bar {
					self.gesture.begin(target);
					Some(NavCommand::Seek(target))
				} else if self.click_to_advance && areas.stage_contains(mouse.column, mouse.row) {
					Some(NavCommand::Advance)
				} else {
					None
				}
			}
			MouseEventKind::Drag(MouseButton::Left) if self.gesture.is_dragging() => areas
				.progress
				.and_then(|area| scene_at_column(area, areas.scene_count, mouse.column))
				.and_then(|target| self.gesture.update(target))
				.map(NavCommand::Seek),
			MouseEventKind::Up(MouseButton::Left) => {
				self.gesture.end();
				None
			}
			_ => None,
		};

		self.hovered = self.gesture.target().or(over_bar);
		command
	}
}

impl Default for InputAdapter {
	fn default() -> Self {
		Self::new(Keymap::default(), true)
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

	use super::*;

	fn areas() -> HitAreas {
		HitAreas {
			stage: Some(Rect::new(0, 1, 30, 6)),
			progress: Some(Rect::new(0, 9, 30, 1)),
			scene_count: 3,
		}
	}

	fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind,
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn key_presses_map_to_commands() {
		let adapter = InputAdapter::default();

		let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
		let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
		let other = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

		assert_eq!(adapter.translate_key(&right), Some(NavCommand::Advance));
		assert_eq!(adapter.translate_key(&left), Some(NavCommand::Retreat));
		assert_eq!(adapter.translate_key(&other), None);
	}

	#[test]
	fn key_releases_are_ignored() {
		let adapter = InputAdapter::default();
		let release = KeyEvent::new_with_kind_and_state(
			KeyCode::Right,
			KeyModifiers::NONE,
			KeyEventKind::Release,
			KeyEventState::NONE,
		);

		assert_eq!(adapter.translate_key(&release), None);
	}

	#[test]
	fn stage_click_advances() {
		let mut adapter = InputAdapter::default();
		let command =
			adapter.translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3), &areas());

		assert_eq!(command, Some(NavCommand::Advance));
	}

	#[test]
	fn stage_click_can_be_disabled() {
		let mut adapter = InputAdapter::new(Keymap::default(), false);
		let command =
			adapter.translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3), &areas());

		assert_eq!(command, None);
	}

	#[test]
	fn progress_click_seeks_segment() {
		let mut adapter = InputAdapter::default();

		let press = mouse(MouseEventKind::Down(MouseButton::Left), 25, 9);
		let command = adapter.translate_mouse(press, &areas());

		assert_eq!(command, Some(NavCommand::Seek(2)));
		assert!(adapter.is_dragging());
	}

	#[test]
	fn dragging_seeks_clamped_targets_once_each() {
		let mut adapter = InputAdapter::default();
		let areas = areas();
		adapter.translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 9), &areas);

		let drag = |adapter: &mut InputAdapter, column, row| {
			let event = mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
			adapter.translate_mouse(event, &areas)
		};

		assert_eq!(drag(&mut adapter, 5, 9), None);
		assert_eq!(drag(&mut adapter, 12, 9), Some(NavCommand::Seek(1)));
		assert_eq!(drag(&mut adapter, 14, 4), None);
		assert_eq!(drag(&mut adapter, 200, 2), Some(NavCommand::Seek(2)));

		adapter.translate_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 200, 2), &areas);
		assert!(!adapter.is_dragging());
		assert_eq!(drag(&mut adapter, 0, 9), None);
	}

	#[test]
	fn hovering_progress_records_segment() {
		let mut adapter = InputAdapter::default();

		adapter.translate_mouse(mouse(MouseEventKind::Moved, 15, 9), &areas());
		assert_eq!(adapter.hovered(), Some(1));

		adapter.translate_mouse(mouse(MouseEventKind::Moved, 15, 2), &areas());
		assert_eq!(adapter.hovered(), None);
	}

	#[test]
	fn tooltip_follows_the_drag_off_the_bar() {
		let mut adapter = InputAdapter::default();
		let areas = areas();
		adapter.translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 9), &areas);
		assert_eq!(adapter.hovered(), Some(0));

		let command =
			adapter.translate_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 25, 3), &areas);
		assert_eq!(command, Some(NavCommand::Seek(2)));
		assert_eq!(adapter.hovered(), Some(2));

		adapter.translate_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 14, 3), &areas);
		assert_eq!(adapter.hovered(), Some(1));

		adapter.translate_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 14, 3), &areas);
		assert_eq!(adapter.hovered(), None);
	}
}
