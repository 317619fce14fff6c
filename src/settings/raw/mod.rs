use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, LogSettings, ResolvedConfig, SettingSource, validation};
use crate::cli::CliArgs;

pub(super) const DEFAULT_TITLE: &str = "Text Highlighter";
pub(super) const DEFAULT_LOG_LEVEL: &str = "info";

/// The configuration file representation before CLI overrides and
/// validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) ui: UiSection,
	pub(super) render: RenderSection,
	pub(super) log: LogSection,
	pub(super) output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) wrap_width: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RenderSection {
	pub(super) overlap: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the file and environment values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(width) = cli.wrap_width {
			self.ui.wrap_width = Some(width);
		}
		if let Some(overlap) = cli.overlap {
			self.render.overlap = Some(overlap.as_str().to_string());
		}
		if cli.no_log {
			self.log.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
	}

	/// Validate and fill defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HILITE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			wrap_width: detect_source(
				cli.wrap_width.is_some(),
				self.ui.wrap_width.is_some(),
				"HILITE__UI__WRAP_WIDTH",
				"--wrap-width",
				"ui.wrap_width",
			),
			overlap: detect_source(
				cli.overlap.is_some(),
				self.render.overlap.is_some(),
				"HILITE__RENDER__OVERLAP",
				"--overlap",
				"render.overlap",
			),
			output_format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"HILITE__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
		};

		let config = ResolvedConfig {
			theme: validation::resolve_theme(self.ui.theme.as_deref(), &sources)?,
			theme_name: self.ui.theme,
			title: self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			wrap_width: self.ui.wrap_width,
			overlap: validation::resolve_overlap(self.render.overlap.as_deref(), &sources)?,
			log: LogSettings {
				enabled: self.log.enabled.unwrap_or(true),
				level: self
					.log
					.level
					.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			},
			output: validation::resolve_output(self.output.format.as_deref(), &sources)?,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
