use std::str::FromStr;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::Theme;

#[derive(Debug)]
pub(super) struct BuiltinTheme {
	pub(super) name: String,
	pub(super) aliases: Vec<String>,
	pub(super) is_default: bool,
	pub(super) theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	title: StyleEntry,
	text: StyleEntry,
	border: StyleEntry,
	highlight: StyleEntry,
	selection: StyleEntry,
	button: StyleEntry,
	button_disabled: StyleEntry,
	button_danger: StyleEntry,
	muted: StyleEntry,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |entry: &StyleEntry, key: &str| {
			entry
				.to_style()
				.with_context(|| format!("{context}: styles.{key}"))
		};
		Ok(Theme {
			title: style(&self.title, "title")?,
			text: style(&self.text, "text")?,
			border: style(&self.border, "border")?,
			highlight: style(&self.highlight, "highlight")?,
			selection: style(&self.selection, "selection")?,
			button: style(&self.button, "button")?,
			button_disabled: style(&self.button_disabled, "button_disabled")?,
			button_danger: style(&self.button_danger, "button_danger")?,
			muted: style(&self.muted, "muted")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(parse_modifier(modifier)?);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<Vec<BuiltinTheme>> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut themes = Vec::with_capacity(files.len());
	for file in files {
		themes.push(parse_theme_file(file)?);
	}

	if themes.is_empty() {
		bail!("no built-in theme definitions were found");
	}
	if let [first, second, ..] = themes
		.iter()
		.filter(|theme| theme.is_default)
		.collect::<Vec<_>>()
		.as_slice()
	{
		bail!(
			"multiple built-in themes are marked as default (`{}` and `{}`)",
			first.name,
			second.name
		);
	}

	Ok(themes)
}

fn parse_theme_file(file: &File) -> Result<BuiltinTheme> {
	let path = file.path().display().to_string();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path} is not valid UTF-8"))?;
	parse_theme_str(contents, &path)
}

fn parse_theme_str(contents: &str, context: &str) -> Result<BuiltinTheme> {
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme definition in {context}"))?;
	let theme = document.styles.into_theme(context)?;
	Ok(BuiltinTheme {
		name: document.name,
		aliases: document
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect(),
		is_default: document.default,
		theme,
	})
}

fn parse_color(input: &str) -> Result<Color> {
	Color::from_str(input.trim()).map_err(|_| anyhow::anyhow!("unknown colour `{input}`"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	Ok(match normalise_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossedout" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	})
}

/// Lowercase and drop separators so `Light-Blue`, `light_blue` and
/// `lightblue` compare equal.
pub(super) fn normalise_key(value: &str) -> String {
	value
		.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.map(|ch| ch.to_ascii_lowercase())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r##"
name = "mono"

[styles.title]
modifiers = ["bold", "Underline"]
[styles.text]
[styles.border]
[styles.highlight]
bg = "#ffff00"
[styles.selection]
bg = "light-blue"
[styles.button]
[styles.button_disabled]
fg = "8"
[styles.button_danger]
[styles.muted]
"##;

	#[test]
	fn parses_colours_and_modifiers() {
		let builtin = parse_theme_str(MINIMAL, "test").unwrap();
		let theme = builtin.theme;
		assert!(!builtin.is_default);
		assert_eq!(theme.selection.bg, Some(Color::LightBlue));
		assert_eq!(theme.button_disabled.fg, Some(Color::Indexed(8)));
		assert!(
			theme
				.title
				.add_modifier
				.contains(Modifier::BOLD | Modifier::UNDERLINED)
		);
		assert_eq!(theme.text, Style::new());
	}

	#[test]
	fn rejects_unknown_modifier() {
		let broken = MINIMAL.replace("\"Underline\"", "\"sparkle\"");
		let err = parse_theme_str(&broken, "test").unwrap_err();
		assert!(format!("{err:#}").contains("unknown modifier `sparkle`"));
	}

	#[test]
	fn rejects_missing_style_table() {
		let broken = MINIMAL.replace("[styles.muted]", "");
		assert!(parse_theme_str(&broken, "test").is_err());
	}
}
