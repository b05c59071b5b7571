use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, tinted_cli_command};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_supports_custom_styles() {
	let command = tinted_cli_command();
	assert!(command.get_about().is_some());

	let config = command
		.get_arguments()
		.find(|arg| arg.get_id() == "config")
		.expect("config argument");
	assert!(config.is_hide_env_set());
	let help = config.get_help().map(ToString::to_string).unwrap_or_default();
	assert!(help.ends_with("(default: none) [env: STEPDECK_CONFIG=]"));
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["stepdeck"]);
	assert_eq!(parsed.deck, None);
	assert!(!parsed.outline);
}

#[test]
fn presentation_flags_are_parsed() {
	let parsed = parse(&[
		"stepdeck",
		"talk.toml",
		"-s",
		"3",
		"--transition-ms",
		"0",
		"--no-click-advance",
		"--hide-progress",
		"--theme",
		"light",
	]);

	assert_eq!(parsed.deck.as_deref(), Some(std::path::Path::new("talk.toml")));
	assert_eq!(parsed.start_scene, Some(3));
	assert_eq!(parsed.transition_ms, Some(0));
	assert!(parsed.no_click_advance);
	assert!(parsed.hide_progress);
	assert_eq!(parsed.theme.as_deref(), Some("light"));
}

#[test]
fn deck_path_and_builtin_conflict() {
	let result =
		CliArgs::command().try_get_matches_from(["stepdeck", "talk.toml", "-b", "ai-evaluation"]);
	assert!(result.is_err());
}
