use ratatui::layout::Rect;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

use super::state::TextSelection;

/// Text covered by `selection` on the drawn `lines`.
///
/// The lines are soft-wrapped pieces of one paragraph, so rows are joined
/// without separators. Returns `None` when nothing is covered.
pub fn extract_selected_text(
	lines: &[Line<'static>],
	selection: &TextSelection,
	area: Rect,
) -> Option<String> {
	let mut result = String::new();

	for (row, line) in lines.iter().enumerate() {
		let Some((from, to)) = selection.columns_on_line(row, area) else {
			continue;
		};

		let mut col = 0usize;
		for ch in line.spans.iter().flat_map(|span| span.content.chars()) {
			if col >= to {
				break;
			}
			if col >= from {
				result.push(ch);
			}
			col += ch.width().unwrap_or(0);
		}
	}

	(!result.is_empty()).then_some(result)
}
