use clap::ValueEnum;
use hilite_core::OverlapMode;

/// How overlapping highlights are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OverlapArg {
	/// Repeat text covered by more than one highlight.
	Literal,
	/// Draw each character once.
	Clip,
}

impl OverlapArg {
	/// Identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.mode().as_str()
	}

	pub(crate) fn mode(self) -> OverlapMode {
		match self {
			Self::Literal => OverlapMode::Literal,
			Self::Clip => OverlapMode::Clip,
		}
	}
}

/// Formats for the highlight report printed on exit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Plain => "plain",
			Self::Json => "json",
		}
	}
}
