//! Widgets drawn by the presenter.

/// Progress bar, step dots, and tooltip.
pub mod progress;
/// Scene stage with revealed blocks.
pub mod stage;
/// Slide animation between scenes.
pub mod transition;

use ratatui::layout::Rect;

pub use progress::{
	ProgressContext, TooltipContext, render_progress, render_tooltip, scene_at_column,
	segment_start, step_indicator,
};
pub use stage::{StageContext, render_stage, stage_lines};
pub use transition::{Transition, blit_shifted};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
