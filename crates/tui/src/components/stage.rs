use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use stepdeck_api::{BlockKind, RevealBlock, SceneDescriptor};

use crate::style::Theme;

const BULLET_MARKER: &str = "• ";
const CODE_INDENT: &str = "  ";

/// Inputs for [`render_stage`].
pub struct StageContext<'a> {
	pub area: Rect,
	pub scene: &'a SceneDescriptor,
	pub step: usize,
	pub theme: &'a Theme,
}

/// Render the bordered stage with every block visible at the current step.
pub fn render_stage(buf: &mut Buffer, ctx: StageContext<'_>) {
	let StageContext {
		area,
		scene,
		step,
		theme,
	} = ctx;

	let block = Block::bordered()
		.border_style(theme.border)
		.title(Line::from(Span::styled(
			format!(" {} ", scene.title()),
			theme.scene_title_style(),
		)));

	Paragraph::new(stage_lines(scene, step, theme))
		.block(block)
		.wrap(Wrap { trim: false })
		.render(area, buf);
}

/// Lines for the blocks of `scene` revealed at `step`.
#[must_use]
pub fn stage_lines(scene: &SceneDescriptor, step: usize, theme: &Theme) -> Vec<Line<'static>> {
	let mut lines = Vec::new();
	for block in scene.visible_blocks(step) {
		push_block(&mut lines, block, theme);
	}
	lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &RevealBlock, theme: &Theme) {
	match block.kind {
		BlockKind::Heading => {
			lines.push(Line::styled(block.text.clone(), theme.heading));
			lines.push(Line::default());
		}
		BlockKind::Text => {
			lines.extend(
				block
					.text
					.lines()
					.map(|line| Line::styled(line.to_string(), theme.text)),
			);
		}
		BlockKind::Bullet => {
			let mut first = true;
			for line in block.text.lines() {
				let marker = if first { BULLET_MARKER } else { "  " };
				first = false;
				lines.push(Line::from(vec![
					Span::styled(marker, theme.bullet_marker_style()),
					Span::styled(line.to_string(), theme.text),
				]));
			}
		}
		BlockKind::Code => {
			lines.extend(
				block
					.text
					.lines()
					.map(|line| Line::styled(format!("{CODE_INDENT}{line}"), theme.code)),
			);
		}
		BlockKind::Note => {
			lines.extend(
				block
					.text
					.lines()
					.map(|line| Line::styled(line.to_string(), theme.note)),
			);
		}
	}
}
