use ratatui::style::Style;
use thiserror::Error;

/// Styles for every element of the highlighter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Panel title.
	pub title: Style,
	/// Plain paragraph text.
	pub text: Style,
	/// Panel and preview borders.
	pub border: Style,
	/// Committed highlights.
	pub highlight: Style,
	/// Text under an in-progress or finished mouse selection.
	pub selection: Style,
	/// The commit button while a candidate exists.
	pub button: Style,
	/// The commit button with nothing to commit.
	pub button_disabled: Style,
	/// The clear button.
	pub button_danger: Style,
	/// Hints and secondary labels.
	pub muted: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
	#[error("unknown theme `{name}` (available: {})", .available.join(", "))]
	Unknown {
		name: String,
		available: Vec<String>,
	},
}
