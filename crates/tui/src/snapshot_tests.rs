use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use stepdeck_api::{BlockKind, RevealBlock, SceneDescriptor, SceneRegistry, Stepper};

use crate::App;
use crate::config::PresenterOptions;
use crate::input::{Keymap, NavCommand};
use crate::style::StyleConfig;

fn sample_app(options: PresenterOptions) -> App {
	let registry = SceneRegistry::new(
		"Agents",
		[
			SceneDescriptor::new("intro", "Intro", 2).blocks([
				RevealBlock::new(0, BlockKind::Heading, "Why agents"),
				RevealBlock::new(1, BlockKind::Bullet, "they act"),
			]),
			SceneDescriptor::new("loop", "Loop", 1)
				.block(RevealBlock::new(0, BlockKind::Text, "observe then act")),
			SceneDescriptor::new("eval", "Eval", 1)
				.block(RevealBlock::new(0, BlockKind::Note, "measure it")),
		],
	)
	.expect("valid registry");

	App::with_parts(
		Stepper::new(registry),
		StyleConfig::default(),
		options,
		Keymap::default(),
	)
}

fn terminal() -> Terminal<TestBackend> {
	Terminal::new(TestBackend::new(40, 10)).expect("terminal")
}

#[test]
fn second_step_reveals_bullet_snapshot() {
	let mut app = sample_app(PresenterOptions::default());
	let now = Instant::now();
	app.apply(NavCommand::Advance, now);

	let mut terminal = terminal();
	terminal
		.draw(|frame| app.draw_at(frame, now))
		.expect("draw snapshot frame");

	insta::assert_snapshot!("second_step_reveals_bullet", terminal.backend());
}

#[test]
fn hovering_progress_shows_scene_tooltip_snapshot() {
	let mut app = sample_app(PresenterOptions::default());
	let now = Instant::now();
	app.apply(NavCommand::Advance, now);

	let mut terminal = terminal();
	terminal
		.draw(|frame| app.draw_at(frame, now))
		.expect("draw first frame");

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Moved,
		column: 30,
		row: 9,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.input.hovered(), Some(2));

	terminal
		.draw(|frame| app.draw_at(frame, now))
		.expect("draw hover frame");

	insta::assert_snapshot!("hovering_progress_shows_scene_tooltip", terminal.backend());
}

#[test]
fn scene_change_slides_in_from_the_right_snapshot() {
	let options = PresenterOptions::default().with_transition(Duration::from_millis(100));
	let mut app = sample_app(options);
	let start = Instant::now();
	app.apply(NavCommand::Advance, start);
	app.apply(NavCommand::Advance, start);

	let mut terminal = terminal();
	terminal
		.draw(|frame| app.draw_at(frame, start + Duration::from_millis(60)))
		.expect("draw transition frame");

	insta::assert_snapshot!("scene_change_slides_in_from_the_right", terminal.backend());

	terminal
		.draw(|frame| app.draw_at(frame, start + Duration::from_millis(200)))
		.expect("draw settled frame");
	assert!(app.transition.is_none());
}
