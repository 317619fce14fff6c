//! The highlighter view-model.
//!
//! [`Highlighter`] owns the transient widget state: the in-flight candidate
//! and the committed highlights. Nothing here outlives the instance.

use tracing::debug;

use crate::outcome::{HighlightOutcome, HighlightRecord};
use crate::segment::{OverlapMode, Segment, render_segments_with};
use crate::selection::{CandidateSelection, SelectionSource, locate};
use crate::store::HighlightSet;
use crate::text::FIXED_TEXT;

/// Selection tracking plus committed highlights over one immutable text.
#[derive(Debug, Clone)]
pub struct Highlighter {
	text: &'static str,
	candidate: Option<CandidateSelection>,
	highlights: HighlightSet,
	overlap: OverlapMode,
}

impl Default for Highlighter {
	fn default() -> Self {
		Self::new()
	}
}

impl Highlighter {
	/// Highlighter over [`FIXED_TEXT`].
	pub fn new() -> Self {
		Self::with_text(FIXED_TEXT)
	}

	pub fn with_text(text: &'static str) -> Self {
		Self {
			text,
			candidate: None,
			highlights: HighlightSet::new(),
			overlap: OverlapMode::default(),
		}
	}

	#[must_use]
	pub fn with_overlap(mut self, overlap: OverlapMode) -> Self {
		self.overlap = overlap;
		self
	}

	pub fn text(&self) -> &'static str {
		self.text
	}

	pub fn overlap(&self) -> OverlapMode {
		self.overlap
	}

	pub fn set_overlap(&mut self, overlap: OverlapMode) {
		self.overlap = overlap;
	}

	pub fn candidate(&self) -> Option<&CandidateSelection> {
		self.candidate.as_ref()
	}

	pub fn highlights(&self) -> &HighlightSet {
		&self.highlights
	}

	/// Whether [`Highlighter::commit`] would do anything.
	pub fn can_commit(&self) -> bool {
		self.candidate.is_some()
	}

	/// Handle the end of a pointer selection.
	///
	/// Reads the host selection and, if it can be located in the text,
	/// replaces the candidate. Anything else leaves the candidate as it was.
	/// Returns whether the candidate changed.
	pub fn on_selection_completed<S>(&mut self, source: &S) -> bool
	where
		S: SelectionSource + ?Sized,
	{
		let Some(selected) = source.selected_text() else {
			debug!("selection finished with nothing selected");
			return false;
		};
		let Some(candidate) = locate(self.text, &selected) else {
			debug!(len = selected.len(), "ignoring selection not found in text");
			return false;
		};
		debug!(
			start = candidate.range.start(),
			end = candidate.range.end(),
			"candidate selection updated"
		);
		self.candidate = Some(candidate);
		true
	}

	/// Move the candidate into the committed highlights.
	///
	/// Returns `false` without touching anything when there is no candidate.
	pub fn commit(&mut self) -> bool {
		let Some(candidate) = self.candidate.take() else {
			return false;
		};
		debug!(
			start = candidate.range.start(),
			end = candidate.range.end(),
			total = self.highlights.len() + 1,
			"highlight committed"
		);
		self.highlights.push(candidate.range);
		true
	}

	/// Drop every committed highlight. The candidate is kept.
	pub fn clear(&mut self) {
		debug!(dropped = self.highlights.len(), "highlights cleared");
		self.highlights.clear();
	}

	/// Segments for the current state, using the configured overlap mode.
	pub fn segments(&self) -> Vec<Segment<'static>> {
		render_segments_with(self.text, &self.highlights, self.overlap)
	}

	/// Snapshot of the committed highlights in commit order.
	pub fn outcome(&self) -> HighlightOutcome {
		HighlightOutcome {
			highlights: self
				.highlights
				.iter()
				.map(|range| HighlightRecord {
					start: range.start(),
					end: range.end(),
					text: range.slice(self.text).to_owned(),
				})
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::segment::SegmentKind;

	struct NoSelection;

	impl SelectionSource for NoSelection {
		fn selected_text(&self) -> Option<String> {
			None
		}
	}

	#[test]
	fn select_and_commit_senior() {
		let mut highlighter = Highlighter::new();
		assert!(highlighter.on_selection_completed("Senior"));
		assert!(highlighter.can_commit());
		assert!(highlighter.commit());
		assert!(highlighter.candidate().is_none());

		let segments = highlighter.segments();
		let shape: Vec<_> = segments
			.iter()
			.map(|segment| (segment.kind, segment.start, segment.end))
			.collect();
		assert_eq!(
			shape,
			vec![
				(SegmentKind::Plain, 0, 15),
				(SegmentKind::Highlight, 15, 21),
				(SegmentKind::Plain, 21, FIXED_TEXT.len()),
			]
		);
		assert_eq!(segments[1].text, "Senior");
	}

	#[test]
	fn commit_without_candidate_is_noop() {
		let mut highlighter = Highlighter::new();
		assert!(!highlighter.commit());
		assert!(highlighter.highlights().is_empty());

		highlighter.on_selection_completed("Senior");
		highlighter.commit();
		let before = highlighter.highlights().clone();
		assert!(!highlighter.commit());
		assert_eq!(highlighter.highlights(), &before);
	}

	#[test]
	fn unknown_or_missing_selection_keeps_candidate() {
		let mut highlighter = Highlighter::new();
		assert!(!highlighter.on_selection_completed("xyz123"));
		assert!(highlighter.candidate().is_none());

		highlighter.on_selection_completed("React");
		let candidate = highlighter.candidate().cloned();
		assert!(!highlighter.on_selection_completed("xyz123"));
		assert!(!highlighter.on_selection_completed(&NoSelection));
		assert!(!highlighter.on_selection_completed("  "));
		assert_eq!(highlighter.candidate().cloned(), candidate);
		assert!(highlighter.highlights().is_empty());
	}

	#[test]
	fn new_selection_replaces_candidate() {
		let mut highlighter = Highlighter::new();
		highlighter.on_selection_completed("React");
		highlighter.on_selection_completed("TypeScript");
		assert_eq!(highlighter.candidate().map(|c| c.text.as_str()), Some("TypeScript"));
	}

	#[test]
	fn clear_resets_rendering_but_keeps_candidate() {
		let mut highlighter = Highlighter::new();
		highlighter.on_selection_completed("Senior");
		highlighter.commit();
		highlighter.on_selection_completed("React");

		highlighter.clear();
		assert!(highlighter.highlights().is_empty());
		assert!(highlighter.can_commit());

		let segments = highlighter.segments();
		assert_eq!(segments.len(), 1);
		assert_eq!(segments[0].text, FIXED_TEXT);
	}

	#[test]
	fn prefix_selection_renders_two_segments() {
		let mut highlighter = Highlighter::new();
		highlighter.on_selection_completed("Results-driven");
		highlighter.commit();
		let segments = highlighter.segments();
		assert_eq!(segments.len(), 2);
		assert!(segments[0].is_highlight());
		assert!(!segments[1].is_highlight());
	}

	#[test]
	fn overlap_mode_changes_rendering() {
		let mut highlighter = Highlighter::with_text("abcdef");
		highlighter.on_selection_completed("abcd");
		highlighter.commit();
		highlighter.on_selection_completed("cdef");
		highlighter.commit();

		let literal: String = highlighter.segments().iter().map(|s| s.text).collect();
		assert_eq!(literal, "abcdcdef");

		highlighter.set_overlap(OverlapMode::Clip);
		let clipped: String = highlighter.segments().iter().map(|s| s.text).collect();
		assert_eq!(clipped, "abcdef");
	}

	#[test]
	fn outcome_lists_commits_in_order() {
		let mut highlighter = Highlighter::new();
		for phrase in ["React", "Senior", "React"] {
			highlighter.on_selection_completed(phrase);
			highlighter.commit();
		}
		let outcome = highlighter.outcome();
		let texts: Vec<_> = outcome.highlights.iter().map(|h| h.text.as_str()).collect();
		assert_eq!(texts, ["React", "Senior", "React"]);
		assert_eq!(
			(outcome.highlights[1].start, outcome.highlights[1].end),
			(15, 21)
		);
	}
}
