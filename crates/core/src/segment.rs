//! Splitting the text into plain and highlighted runs for display.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::store::HighlightSet;

/// Whether a segment is drawn as ordinary text or as a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
	Plain,
	Highlight,
}

/// A contiguous slice of the text tagged with how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
	pub kind: SegmentKind,
	pub start: usize,
	pub end: usize,
	pub text: &'a str,
}

impl<'a> Segment<'a> {
	fn plain(text: &'a str, start: usize, end: usize) -> Self {
		Self {
			kind: SegmentKind::Plain,
			start,
			end,
			text: &text[start..end],
		}
	}

	fn highlight(text: &'a str, start: usize, end: usize) -> Self {
		Self {
			kind: SegmentKind::Highlight,
			start,
			end,
			text: &text[start..end],
		}
	}

	pub fn is_highlight(&self) -> bool {
		self.kind == SegmentKind::Highlight
	}
}

impl fmt::Display for Segment<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.kind {
			SegmentKind::Plain => write!(f, "plain[{},{})", self.start, self.end),
			SegmentKind::Highlight => {
				write!(f, "highlight[{},{}) {:?}", self.start, self.end, self.text)
			}
		}
	}
}

/// How the sweep treats ranges that overlap text already emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
	/// Every committed range is emitted whole and the cursor jumps to its end,
	/// even backwards. Overlapping text is drawn more than once.
	#[default]
	Literal,
	/// Ranges are trimmed to the text not yet emitted, so the segments always
	/// concatenate back to the original text.
	Clip,
}

impl OverlapMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Literal => "literal",
			Self::Clip => "clip",
		}
	}
}

/// Render `highlights` over `text` with [`OverlapMode::Literal`].
pub fn render_segments<'a>(text: &'a str, highlights: &HighlightSet) -> Vec<Segment<'a>> {
	render_segments_with(text, highlights, OverlapMode::Literal)
}

/// Render `highlights` over `text`.
///
/// Ranges that cannot slice `text` (checked against some other string) are
/// skipped.
pub fn render_segments_with<'a>(
	text: &'a str,
	highlights: &HighlightSet,
	mode: OverlapMode,
) -> Vec<Segment<'a>> {
	if highlights.is_empty() {
		return vec![Segment::plain(text, 0, text.len())];
	}

	let mut segments = Vec::with_capacity(highlights.len() * 2 + 1);
	let mut cursor = 0usize;

	for range in highlights.sorted() {
		if !range.fits(text) {
			warn!(
				start = range.start(),
				end = range.end(),
				len = text.len(),
				"skipping highlight outside the text"
			);
			continue;
		}
		let (start, end) = (range.start(), range.end());
		match mode {
			OverlapMode::Literal => {
				if start > cursor {
					segments.push(Segment::plain(text, cursor, start));
				}
				segments.push(Segment::highlight(text, start, end));
				cursor = end;
			}
			OverlapMode::Clip => {
				if end <= cursor {
					continue;
				}
				if start > cursor {
					segments.push(Segment::plain(text, cursor, start));
				}
				segments.push(Segment::highlight(text, start.max(cursor), end));
				cursor = end;
			}
		}
	}

	if cursor < text.len() {
		segments.push(Segment::plain(text, cursor, text.len()));
	}

	segments
}
