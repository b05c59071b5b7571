mod cli;
mod settings;

use anyhow::Result;
use cli::parse_cli;
use settings::ResolvedConfig;
use stepdeck::{Presenter, decks, logging};
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in stepdeck::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.list_decks {
		for name in decks::builtin_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Some(path) = logging::initialize(&resolved.log_level)? {
		info!(log = %path.display(), "logging initialised");
	}

	let registry = resolved.deck.load()?;
	info!(deck = %resolved.deck, scenes = registry.len(), "deck loaded");

	if cli.outline {
		println!("{}", decks::outline(&registry).trim_end());
		return Ok(());
	}

	present(registry, resolved)
}

/// Run the interactive presenter until the user quits.
fn present(registry: stepdeck::SceneRegistry, settings: ResolvedConfig) -> Result<()> {
	let ResolvedConfig {
		start_scene,
		theme,
		options,
		keymap,
		..
	} = settings;

	let mut presenter = Presenter::new(registry)
		.with_options(options)
		.with_keymap(keymap)
		.with_start_scene(start_scene.saturating_sub(1));
	if let Some(name) = theme.as_deref() {
		presenter = presenter.with_theme_name(name);
	}

	let outcome = presenter.run()?;
	let (scene, step) = outcome.final_state.position();
	info!(
		scene,
		step,
		completed = outcome.completed,
		"presentation finished"
	);

	Ok(())
}
