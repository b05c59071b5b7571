use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen regions of one presenter frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameLayout {
	pub(crate) title: Rect,
	pub(crate) counter: Rect,
	pub(crate) stage: Rect,
	pub(crate) footer: Rect,
	pub(crate) progress: Option<Rect>,
}

/// Split `area` into header, stage, footer, and the optional progress bar.
pub(crate) fn frame_layout(area: Rect, counter_width: u16, show_progress: bool) -> FrameLayout {
	let area = area.inner(Margin {
		vertical: 0,
		horizontal: 1,
	});

	let progress_height = u16::from(show_progress);
	let [header, stage, footer, progress] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(3),
		Constraint::Length(1),
		Constraint::Length(progress_height),
	])
	.areas(area);

	let [title, counter] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(counter_width)]).areas(header);

	FrameLayout {
		title,
		counter,
		stage,
		footer,
		progress: (show_progress && progress.height > 0).then_some(progress),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rows_are_stacked_inside_the_margin() {
		let layout = frame_layout(Rect::new(0, 0, 40, 12), 5, true);

		assert_eq!(layout.title, Rect::new(1, 0, 33, 1));
		assert_eq!(layout.counter, Rect::new(34, 0, 5, 1));
		assert_eq!(layout.stage, Rect::new(1, 1, 38, 9));
		assert_eq!(layout.footer, Rect::new(1, 10, 38, 1));
		assert_eq!(layout.progress, Some(Rect::new(1, 11, 38, 1)));
	}

	#[test]
	fn hidden_progress_gives_the_stage_its_row() {
		let layout = frame_layout(Rect::new(0, 0, 40, 12), 5, false);

		assert_eq!(layout.stage, Rect::new(1, 1, 38, 10));
		assert_eq!(layout.footer, Rect::new(1, 11, 38, 1));
		assert_eq!(layout.progress, None);
	}
}
