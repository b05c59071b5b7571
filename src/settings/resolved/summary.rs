use std::fmt::Write;

use stepdeck::{app_dirs, logging};
use stepdeck_tui::KeyAction;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Deck: {}", config.deck);
	let _ = writeln!(out, "  Start scene: {}", config.start_scene);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the default theme)")
	);
	let transition = config.options.transition.as_millis();
	if transition == 0 {
		let _ = writeln!(out, "  Transition: off");
	} else {
		let _ = writeln!(out, "  Transition: {transition} ms");
	}
	let _ = writeln!(
		out,
		"  Click to advance: {}",
		bool_to_word(config.options.click_to_advance)
	);
	let _ = writeln!(
		out,
		"  Show progress: {}",
		bool_to_word(config.options.show_progress)
	);
	for action in KeyAction::ALL {
		let keys: Vec<String> = config
			.keymap
			.bindings_for(action)
			.iter()
			.map(ToString::to_string)
			.collect();
		let _ = writeln!(out, "  Keys ({action}): {}", keys.join(", "));
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	if let Ok(dir) = app_dirs::get_data_dir() {
		let _ = writeln!(
			out,
			"  Log file: {}",
			dir.join(logging::LOG_FILE_NAME).display()
		);
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
