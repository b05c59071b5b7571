use stepdeck::{logging, theme};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.start_scene == 0 {
		return Err(ConfigError::invalid(
			"deck.start_scene",
			config.start_scene.to_string(),
			sources.source_for_start_scene(),
			"scenes are numbered from 1",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", theme::names().join(", ")),
		));
	}

	if !logging::is_valid_level(&config.log_level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			format!("expected one of {}", logging::LEVELS.join(", ")),
		));
	}

	Ok(())
}
