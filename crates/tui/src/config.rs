/// Human-readable text shown around the highlighter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading above the paragraph.
	pub title: String,
	/// Label of the button committing the current selection.
	pub commit_label: String,
	/// Label of the button removing every highlight.
	pub clear_label: String,
	/// Title of the box showing the uncommitted selection.
	pub selected_title: String,
	/// Key hints on the bottom row.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Text Highlighter".to_string(),
			commit_label: "Highlight Selection".to_string(),
			clear_label: "Clear Highlights".to_string(),
			selected_title: "Selected text".to_string(),
			hint: "drag to select · enter highlight · c clear · q quit".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the heading, keeping the other labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
