use hilite_core::OverlapMode;
use hilite_tui::Theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};
use crate::cli::OutputFormat;

/// Narrowest wrap width that still shows whole words of the paragraph.
pub(crate) const MIN_WRAP_WIDTH: u16 = 10;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(width) = config.wrap_width
		&& width < MIN_WRAP_WIDTH
	{
		return Err(ConfigError::invalid(
			"ui.wrap_width",
			width.to_string(),
			sources.source_for_wrap_width(),
			format!("must be at least {MIN_WRAP_WIDTH}"),
		));
	}

	Ok(())
}

/// Look up a built-in theme; `None` selects the default.
pub(crate) fn resolve_theme(
	name: Option<&str>,
	sources: &ConfigSources,
) -> Result<Theme, ConfigError> {
	let Some(name) = name else {
		return Ok(hilite_tui::default_theme());
	};
	hilite_tui::theme_by_name(name).map_err(|err| {
		ConfigError::invalid("ui.theme", name, sources.source_for_theme(), err.to_string())
	})
}

pub(crate) fn resolve_overlap(
	value: Option<&str>,
	sources: &ConfigSources,
) -> Result<OverlapMode, ConfigError> {
	match value.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
		None => Ok(OverlapMode::default()),
		Some("literal") => Ok(OverlapMode::Literal),
		Some("clip") => Ok(OverlapMode::Clip),
		Some(_) => Err(ConfigError::invalid(
			"render.overlap",
			value.unwrap_or_default(),
			sources.source_for_overlap(),
			"expected `literal` or `clip`",
		)),
	}
}

pub(crate) fn resolve_output(
	value: Option<&str>,
	sources: &ConfigSources,
) -> Result<OutputFormat, ConfigError> {
	match value.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
		None => Ok(OutputFormat::default()),
		Some("plain") => Ok(OutputFormat::Plain),
		Some("json") => Ok(OutputFormat::Json),
		Some(_) => Err(ConfigError::invalid(
			"output.format",
			value.unwrap_or_default(),
			sources.source_for_output_format(),
			"expected `plain` or `json`",
		)),
	}
}
