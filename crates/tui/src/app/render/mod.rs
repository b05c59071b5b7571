pub(crate) mod layout;

use std::time::Instant;

use layout::frame_layout;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::components::{
	ProgressContext, StageContext, TooltipContext, blit_shifted, render_progress, render_stage,
	render_tooltip, step_indicator,
};
use crate::input::HitAreas;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.draw_at(frame, Instant::now());
	}

	/// Render the presenter as it looks at `now`.
	pub(crate) fn draw_at(&mut self, frame: &mut Frame, now: Instant) {
		if self
			.transition
			.is_some_and(|transition| transition.is_finished(now))
		{
			self.transition = None;
		}

		let registry = self.stepper.registry();
		let scene_count = registry.len();
		let theme = self.style.theme;

		let counter = format!("{}/{}", self.stepper.scene_index() + 1, scene_count);
		let layout = frame_layout(
			frame.area(),
			counter.width() as u16,
			self.options.show_progress,
		);

		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(registry.title().to_string(), theme.header))),
			layout.title,
		);
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(counter, theme.header)))
				.alignment(Alignment::Right),
			layout.counter,
		);

		let scene = self.stepper.current_scene();
		let shift = self
			.transition
			.map_or(0, |transition| transition.shift(now, layout.stage.width));
		render_stage_shifted(
			frame.buffer_mut(),
			StageContext {
				area: layout.stage,
				scene,
				step: self.stepper.step(),
				theme: &theme,
			},
			shift,
		);

		frame.render_widget(
			Paragraph::new(step_indicator(self.stepper.step(), scene.total_steps(), &theme)),
			layout.footer,
		);

		if let Some(progress) = layout.progress {
			render_progress(
				frame.buffer_mut(),
				ProgressContext {
					area: progress,
					scene_count,
					current: self.stepper.scene_index(),
					theme: &theme,
				},
			);

			if let Some(hovered) = self.input.hovered()
				&& let Ok(target) = registry.get(hovered)
			{
				render_tooltip(
					frame.buffer_mut(),
					TooltipContext {
						area: layout.footer,
						bar: progress,
						scene_count,
						scene: hovered,
						title: target.title(),
						theme: &theme,
					},
				);
			}
		}

		self.hit_areas = HitAreas {
			stage: Some(layout.stage),
			progress: layout.progress,
			scene_count,
		};
	}
}

fn render_stage_shifted(buf: &mut Buffer, ctx: StageContext<'_>, shift: i32) {
	if shift == 0 {
		render_stage(buf, ctx);
		return;
	}
	let area = ctx.area;
	let mut scratch = Buffer::empty(area);
	render_stage(&mut scratch, ctx);
	blit_shifted(&scratch, buf, area, shift);
}
