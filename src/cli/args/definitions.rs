use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `stepdeck` binary.
#[derive(Parser, Debug, Default)]
#[command(
	name = "stepdeck",
	version,
	long_version = long_version(),
	about = "Step through slide decks in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "DECK",
		help = "Deck file to present (default: the built-in agent-skills deck)"
	)]
	pub(crate) deck: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "STEPDECK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long,
		value_name = "NAME",
		conflicts_with = "deck",
		help = "Present one of the built-in decks (default: none)"
	)]
	pub(crate) builtin: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long = "start-scene",
		value_name = "N",
		help = "Open the deck on scene N, counting from 1 (default: 1)"
	)]
	pub(crate) start_scene: Option<usize>,
	#[arg(
		long = "transition-ms",
		value_name = "MS",
		help = "Length of the slide between scenes, 0 to disable (default: 180)"
	)]
	pub(crate) transition_ms: Option<u64>,
	#[arg(
		long = "no-click-advance",
		help = "Do not advance when the stage is clicked (default: disabled)"
	)]
	pub(crate) no_click_advance: bool,
	#[arg(
		long = "hide-progress",
		help = "Hide the per-scene progress bar (default: disabled)"
	)]
	pub(crate) hide_progress: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log verbosity: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-decks",
		help = "List the built-in decks and exit (default: disabled)"
	)]
	pub(crate) list_decks: bool,
	#[arg(
		long,
		help = "Print the deck outline instead of presenting it (default: disabled)"
	)]
	pub(crate) outline: bool,
}
