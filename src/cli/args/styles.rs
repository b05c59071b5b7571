use std::fmt::Write;

use clap::Arg;
use clap::builder::styling::{AnsiColor, Color, Effects, Style};
use clap::builder::{StyledStr, Styles};
use stepdeck::{app_dirs, logging};

/// Produce the full version banner including config and data directories.
pub(super) fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let log_file = match app_dirs::get_data_dir() {
		Ok(path) => path.join(logging::LOG_FILE_NAME).display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("stepdeck {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log file: {log_file}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

fn muted_style() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

/// Split a trailing ` (default: ...)` note off a help string.
fn split_default_note(help: &str) -> (&str, Option<&str>) {
	match help.rfind(" (default: ") {
		Some(start) if help.ends_with(')') => (&help[..start], Some(&help[start + 1..])),
		_ => (help, None),
	}
}

/// Render the default note and the environment variable of `arg` in the muted
/// style after its help text.
pub(super) fn dim_help_notes(arg: Arg) -> Arg {
	let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
	let (text, default_note) = split_default_note(&help);
	let env_note = arg
		.get_env()
		.map(|name| format!("[env: {}=]", name.to_string_lossy()));

	if default_note.is_none() && env_note.is_none() {
		return arg;
	}

	let muted = muted_style();
	let mut styled = StyledStr::new();
	styled.push_str(text);
	for note in default_note.map(str::to_string).into_iter().chain(env_note) {
		if !text.is_empty() {
			styled.push_str(" ");
		}
		let _ = write!(styled, "{muted}{note}{muted:#}");
	}

	arg.hide_env(true).help(styled)
}
