use hilite_core::{HighlightOutcome, Highlighter};
use ratatui::layout::Rect;
use tracing::info;

use super::panel::PanelState;
use crate::config::UiLabels;
use crate::style::Theme;

/// Screen areas of the two buttons from the last draw.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ButtonAreas {
	pub commit: Option<Rect>,
	pub clear: Option<Rect>,
}

/// Terminal state around a [`Highlighter`].
pub struct App {
	/// Candidate selection and committed highlights.
	pub highlighter: Highlighter,
	/// Active colour scheme.
	pub theme: Theme,
	pub(crate) labels: UiLabels,
	/// Upper bound on the wrapped line width, if any.
	pub(crate) wrap_width: Option<u16>,
	pub(crate) panel: PanelState,
	pub(crate) buttons: ButtonAreas,
}

impl App {
	pub fn new(highlighter: Highlighter) -> Self {
		Self {
			highlighter,
			theme: Theme::default(),
			labels: UiLabels::default(),
			wrap_width: None,
			panel: PanelState::new(),
			buttons: ButtonAreas::default(),
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_wrap_width(mut self, width: Option<u16>) -> Self {
		self.wrap_width = width;
		self
	}

	/// Highlights committed so far.
	pub fn outcome(&self) -> HighlightOutcome {
		self.highlighter.outcome()
	}

	/// Read the mouse selection back and hand it to the selection tracker.
	pub(crate) fn complete_selection(&mut self) {
		self.panel.selection.finish();
		if let Some(source) = self.panel.selection_source() {
			self.highlighter.on_selection_completed(&source);
		}
	}

	/// "Highlight Selection": commit the candidate, if there is one.
	pub(crate) fn commit_selection(&mut self) {
		if self.highlighter.commit() {
			info!(
				highlights = self.highlighter.highlights().len(),
				"selection highlighted"
			);
			self.panel.selection.clear();
		}
	}

	/// "Clear Highlights".
	pub(crate) fn clear_highlights(&mut self) {
		self.highlighter.clear();
		info!("highlights cleared");
	}
}
