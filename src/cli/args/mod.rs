mod definitions;
mod styles;

use clap::{Command, CommandFactory, FromArgMatches};
pub(crate) use definitions::CliArgs;
use styles::dim_help_notes;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// Apply styling customisation to the generated clap command.
fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_help_notes)
}

#[cfg(test)]
mod tests;
