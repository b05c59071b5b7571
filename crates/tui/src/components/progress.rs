//! Progress bar, step dots, and the hover tooltip.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Scenes beyond this count are summarised as text only.
const MAX_STEP_DOTS: usize = 24;

const SEGMENT_FILLED: &str = "━";
const SEGMENT_PENDING: &str = "─";
const STEP_REVEALED: &str = "●";
const STEP_PENDING: &str = "○";

/// Map a column to the scene whose progress segment covers it.
///
/// Columns left or right of `area` clamp to the first or last scene. Returns
/// `None` when there is nothing to map onto.
#[must_use]
pub fn scene_at_column(area: Rect, scene_count: usize, column: u16) -> Option<usize> {
	if scene_count == 0 || area.width == 0 {
		return None;
	}
	let offset = usize::from(column.saturating_sub(area.x));
	let scene = offset * scene_count / usize::from(area.width);
	Some(scene.min(scene_count - 1))
}

/// First column of the segment for `scene`, if it has any columns at all.
#[must_use]
pub fn segment_start(area: Rect, scene_count: usize, scene: usize) -> Option<u16> {
	(area.left()..area.right())
		.find(|&column| scene_at_column(area, scene_count, column) == Some(scene))
}

/// Inputs for [`render_progress`].
pub struct ProgressContext<'a> {
	pub area: Rect,
	pub scene_count: usize,
	pub current: usize,
	pub theme: &'a Theme,
}

/// Draw one segment per scene. The final column of each segment is left blank
/// when the segment is wide enough, so neighbours stay distinguishable.
pub fn render_progress(buf: &mut Buffer, ctx: ProgressContext<'_>) {
	let ProgressContext {
		area,
		scene_count,
		current,
		theme,
	} = ctx;

	let scenes: Vec<usize> = (area.left()..area.right())
		.filter_map(|column| scene_at_column(area, scene_count, column))
		.collect();

	for (offset, &scene) in scenes.iter().enumerate() {
		let previous = offset.checked_sub(1).map(|index| scenes[index]);
		let next = scenes.get(offset + 1).copied();
		let is_gap = previous == Some(scene) && next.is_some_and(|next| next != scene);

		let (symbol, style) = if is_gap {
			(" ", theme.progress_pending)
		} else if scene < current {
			(SEGMENT_FILLED, theme.progress_done)
		} else if scene == current {
			(SEGMENT_FILLED, theme.progress_current)
		} else {
			(SEGMENT_PENDING, theme.progress_pending)
		};

		let column = area.x + offset as u16;
		buf[(column, area.y)].set_symbol(symbol).set_style(style);
	}
}

/// Dots for each step of the current scene followed by a `step/total` label.
#[must_use]
pub fn step_indicator(step: usize, total_steps: usize, theme: &Theme) -> Line<'static> {
	let mut spans = Vec::new();
	if total_steps <= MAX_STEP_DOTS {
		for index in 0..total_steps {
			if index <= step {
				spans.push(Span::styled(STEP_REVEALED, theme.progress_current));
			} else {
				spans.push(Span::styled(STEP_PENDING, theme.progress_pending));
			}
		}
		spans.push(Span::raw(" "));
	}
	spans.push(Span::styled(
		format!("{}/{}", step + 1, total_steps),
		theme.progress_done,
	));
	Line::from(spans)
}

/// Inputs for [`render_tooltip`].
pub struct TooltipContext<'a> {
	/// Row the tooltip is drawn on.
	pub area: Rect,
	/// Progress bar the tooltip points at.
	pub bar: Rect,
	pub scene_count: usize,
	pub scene: usize,
	pub title: &'a str,
	pub theme: &'a Theme,
}

/// Draw the hovered scene's title above its progress segment.
pub fn render_tooltip(buf: &mut Buffer, ctx: TooltipContext<'_>) {
	let TooltipContext {
		area,
		bar,
		scene_count,
		scene,
		title,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let label = format!(" {}. {title} ", scene + 1);
	let width = (label.width() as u16).min(area.width);
	let anchor = segment_start(bar, scene_count, scene).unwrap_or(bar.x);
	let x = anchor
		.max(area.x)
		.min(area.right().saturating_sub(width));

	buf.set_stringn(x, area.y, &label, usize::from(width), theme.tooltip);
}

#[cfg(test)]
mod tests {
	use ratatui::style::Style;

	use super::*;

	fn row(buf: &Buffer, y: u16) -> String {
		(buf.area.left()..buf.area.right())
			.map(|x| buf[(x, y)].symbol())
			.collect()
	}

	#[test]
	fn columns_map_proportionally_and_clamp() {
		let area = Rect::new(2, 0, 10, 1);

		assert_eq!(scene_at_column(area, 5, 0), Some(0));
		assert_eq!(scene_at_column(area, 5, 2), Some(0));
		assert_eq!(scene_at_column(area, 5, 4), Some(1));
		assert_eq!(scene_at_column(area, 5, 11), Some(4));
		assert_eq!(scene_at_column(area, 5, 40), Some(4));
		assert_eq!(scene_at_column(area, 0, 4), None);
		assert_eq!(scene_at_column(Rect::new(0, 0, 0, 1), 3, 0), None);
	}

	#[test]
	fn narrow_bars_still_reach_the_last_scene() {
		let area = Rect::new(0, 0, 3, 1);
		assert_eq!(scene_at_column(area, 10, 2), Some(6));
		assert_eq!(scene_at_column(area, 10, 3), Some(9));
	}

	#[test]
	fn segment_start_finds_first_column() {
		let area = Rect::new(0, 0, 12, 1);
		assert_eq!(segment_start(area, 3, 0), Some(0));
		assert_eq!(segment_start(area, 3, 1), Some(4));
		assert_eq!(segment_start(area, 3, 2), Some(8));
		assert_eq!(segment_start(Rect::new(0, 0, 2, 1), 4, 1), None);
	}

	#[test]
	fn progress_bar_marks_done_current_and_pending_segments() {
		let theme = Theme::default();
		let area = Rect::new(0, 0, 12, 1);
		let mut buf = Buffer::empty(area);

		render_progress(
			&mut buf,
			ProgressContext {
				area,
				scene_count: 3,
				current: 1,
				theme: &theme,
			},
		);

		assert_eq!(row(&buf, 0), "━━━ ━━━ ────");
		assert_eq!(buf[(0, 0)].style().fg, theme.progress_done.fg);
		assert_eq!(buf[(4, 0)].style().fg, theme.progress_current.fg);
		assert_eq!(buf[(8, 0)].style().fg, theme.progress_pending.fg);
	}

	#[test]
	fn step_indicator_shows_dots_and_label() {
		let theme = Theme::default();
		let line = step_indicator(1, 3, &theme);
		let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, "●●○ 2/3");
	}

	#[test]
	fn long_scenes_only_show_the_label() {
		let theme = Theme::default();
		let line = step_indicator(4, 40, &theme);
		assert_eq!(line.spans.len(), 1);
		assert_eq!(line.spans[0].content, "5/40");
	}

	#[test]
	fn tooltip_is_anchored_and_kept_on_screen() {
		let theme = Theme::default();
		let area = Rect::new(0, 0, 20, 1);
		let bar = Rect::new(0, 1, 20, 1);
		let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));

		render_tooltip(
			&mut buf,
			TooltipContext {
				area,
				bar,
				scene_count: 2,
				scene: 1,
				title: "Attention",
				theme: &theme,
			},
		);

		assert_eq!(row(&buf, 0), "       2. Attention ");
		assert_ne!(buf[(7, 0)].style(), Style::default());
	}
}
