use hilite_core::{Segment, SegmentKind};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::style::Theme;

type Cell = (char, Style);

/// Style used for a segment of the given kind.
pub fn segment_style(kind: SegmentKind, theme: &Theme) -> Style {
	match kind {
		SegmentKind::Plain => theme.text,
		SegmentKind::Highlight => theme.text.patch(theme.highlight),
	}
}

/// Soft-wrap rendered segments into lines at most `width` columns wide.
///
/// Lines break before a word that would overflow. The whitespace at a break
/// stays at the end of the earlier line, so the wrapped lines concatenate back
/// to exactly the segment text. Words wider than a whole line are split.
pub fn wrap_segments(segments: &[Segment<'_>], width: usize, theme: &Theme) -> Vec<Line<'static>> {
	if width == 0 {
		return Vec::new();
	}

	let cells: Vec<Cell> = segments
		.iter()
		.flat_map(|segment| {
			let style = segment_style(segment.kind, theme);
			segment.text.chars().map(move |ch| (ch, style))
		})
		.collect();

	let mut lines: Vec<Vec<Cell>> = Vec::new();
	let mut current: Vec<Cell> = Vec::new();
	let mut current_width = 0usize;

	for token in cells.chunk_by(|a, b| a.0.is_whitespace() == b.0.is_whitespace()) {
		if token[0].0.is_whitespace() {
			current.extend_from_slice(token);
			current_width += cells_width(token);
			continue;
		}

		if current_width + cells_width(token) > width && !current.is_empty() {
			lines.push(std::mem::take(&mut current));
			current_width = 0;
		}

		for &cell in token {
			let cell_width = cell.0.width().unwrap_or(0);
			if current_width + cell_width > width && !current.is_empty() {
				lines.push(std::mem::take(&mut current));
				current_width = 0;
			}
			current.push(cell);
			current_width += cell_width;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}

	lines.iter().map(|cells| cells_to_line(cells)).collect()
}

/// Plain text of a line with styling dropped.
pub fn line_text(line: &Line<'_>) -> String {
	line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn cells_width(cells: &[Cell]) -> usize {
	cells.iter().map(|(ch, _)| ch.width().unwrap_or(0)).sum()
}

fn cells_to_line(cells: &[Cell]) -> Line<'static> {
	let spans: Vec<Span<'static>> = cells
		.chunk_by(|a, b| a.1 == b.1)
		.map(|run| Span::styled(run.iter().map(|(ch, _)| *ch).collect::<String>(), run[0].1))
		.collect();
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use hilite_core::{HighlightRange, HighlightSet, render_segments};

	use super::*;

	fn theme() -> Theme {
		crate::style::default_theme()
	}

	fn texts(lines: &[Line<'_>]) -> Vec<String> {
		lines.iter().map(line_text).collect()
	}

	#[test]
	fn breaks_before_overflowing_word() {
		let segments = render_segments("alpha beta gamma", &HighlightSet::new());
		let lines = wrap_segments(&segments, 11, &theme());
		assert_eq!(texts(&lines), ["alpha beta ", "gamma"]);
	}

	#[test]
	fn lines_concatenate_to_source() {
		let text = hilite_core::FIXED_TEXT;
		for width in [7, 20, 33, 80] {
			let segments = render_segments(text, &HighlightSet::new());
			let joined: String = texts(&wrap_segments(&segments, width, &theme())).concat();
			assert_eq!(joined, text, "width {width}");
		}
	}

	#[test]
	fn wrapped_rows_snapshot() {
		let segments = render_segments(
			"Results-driven Senior Frontend Developer",
			&HighlightSet::new(),
		);
		let rows = texts(&wrap_segments(&segments, 16, &theme())).join("|\n");
		insta::assert_snapshot!(rows, @r"
		Results-driven |
		Senior Frontend |
		Developer
		");
	}

	#[test]
	fn splits_words_wider_than_line() {
		let segments = render_segments("abcdefgh ij", &HighlightSet::new());
		let lines = wrap_segments(&segments, 3, &theme());
		assert_eq!(texts(&lines), ["abc", "def", "gh ", "ij"]);
	}

	#[test]
	fn highlight_spans_keep_their_style() {
		let theme = theme();
		let text = "alpha beta gamma";
		let highlights: HighlightSet = [HighlightRange::new(text, 6, 10).unwrap()]
			.into_iter()
			.collect();
		let segments = render_segments(text, &highlights);
		let lines = wrap_segments(&segments, 40, &theme);
		assert_eq!(lines.len(), 1);

		let styled: Vec<_> = lines[0]
			.spans
			.iter()
			.map(|span| (span.content.as_ref(), span.style == theme.text.patch(theme.highlight)))
			.collect();
		assert_eq!(
			styled,
			[("alpha ", false), ("beta", true), (" gamma", false)]
		);
	}

	#[test]
	fn zero_width_yields_nothing() {
		let segments = render_segments("abc", &HighlightSet::new());
		assert!(wrap_segments(&segments, 0, &theme()).is_empty());
	}
}
