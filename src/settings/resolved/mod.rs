use hilite_core::OverlapMode;
use hilite_tui::Theme;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

use crate::cli::OutputFormat;

/// Logging settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogSettings {
	pub(crate) enabled: bool,
	/// `tracing` filter directive.
	pub(crate) level: String,
}

/// Application-ready configuration.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	/// Theme as requested, `None` for the built-in default.
	pub(crate) theme_name: Option<String>,
	pub(crate) theme: Theme,
	pub(crate) title: String,
	pub(crate) wrap_width: Option<u16>,
	pub(crate) overlap: OverlapMode,
	pub(crate) log: LogSettings,
	pub(crate) output: OutputFormat,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
