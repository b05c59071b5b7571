use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{NamedTheme, Theme};

pub(super) struct ThemeSet {
	pub(super) themes: Vec<NamedTheme>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeStylesConfig {
	header: StyleConfig,
	border: StyleConfig,
	heading: StyleConfig,
	text: StyleConfig,
	code: StyleConfig,
	note: StyleConfig,
	progress_done: StyleConfig,
	progress_current: StyleConfig,
	progress_pending: StyleConfig,
	tooltip: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style =
			|config: StyleConfig, field: &str| config.to_style(&format!("{context}.{field}"));
		Ok(Theme {
			header: style(self.header, "header")?,
			border: style(self.border, "border")?,
			heading: style(self.heading, "heading")?,
			text: style(self.text, "text")?,
			code: style(self.code, "code")?,
			note: style(self.note, "note")?,
			progress_done: style(self.progress_done, "progress_done")?,
			progress_current: style(self.progress_current, "progress_current")?,
			progress_pending: style(self.progress_pending, "progress_pending")?,
			tooltip: style(self.tooltip, "tooltip")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleConfig {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_theme_set(dir: &Dir) -> Result<ThemeSet> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut themes: Vec<NamedTheme> = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;

	for file in files {
		let (entry, is_default) = parse_theme_file(file)?;

		ensure_unclaimed(&themes, &entry)?;

		if is_default {
			if let Some((_, existing)) = &default_theme {
				bail!(
					"`{existing}` and `{}` are both marked as the default theme",
					entry.name
				);
			}
			default_theme = Some((entry.theme, entry.name.clone()));
		}

		themes.push(entry);
	}

	let Some(first) = themes.first() else {
		bail!("no theme definitions were found");
	};
	let default_theme = default_theme.map_or(first.theme, |(theme, _)| theme);

	Ok(ThemeSet {
		themes,
		default_theme,
	})
}

/// Reject a theme whose name or alias already resolves to an earlier one.
fn ensure_unclaimed(themes: &[NamedTheme], entry: &NamedTheme) -> Result<()> {
	for label in std::iter::once(&entry.name).chain(&entry.aliases) {
		if let Some(owner) = themes.iter().find(|theme| theme.answers_to(label)) {
			bail!("`{label}` names both `{}` and `{}`", owner.name, entry.name);
		}
	}
	Ok(())
}

fn parse_theme_file(file: &File) -> Result<(NamedTheme, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	parse_theme_source(contents, &format!("{path:?}"))
}

fn parse_theme_source(contents: &str, context: &str) -> Result<(NamedTheme, bool)> {
	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme definition in {context}"))?;

	let theme = config.styles.into_theme(&format!("{context}.styles"))?;
	let aliases = config
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.collect();

	Ok((
		NamedTheme {
			name: config.name,
			aliases,
			theme,
		},
		config.default,
	))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	if hex.len() != 6 || !hex.is_ascii() {
		bail!("hex colours must be 6 characters long");
	}

	let component = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `#{hex}`"))
	};

	Ok(Color::Rgb(component(0..2)?, component(2..4)?, component(4..6)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}
