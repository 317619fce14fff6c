use std::fmt;

/// Where a setting value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that are validated.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) theme: Option<SettingSource>,
	pub(crate) wrap_width: Option<SettingSource>,
	pub(crate) overlap: Option<SettingSource>,
	pub(crate) output_format: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_wrap_width(&self) -> SettingSource {
		or_key(&self.wrap_width, "ui.wrap_width")
	}

	pub(crate) fn source_for_overlap(&self) -> SettingSource {
		or_key(&self.overlap, "render.overlap")
	}

	pub(crate) fn source_for_output_format(&self) -> SettingSource {
		or_key(&self.output_format, "output.format")
	}
}
