use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use super::state::TextSelection;

/// Overlay `overlay` onto the columns covered by `selection`.
pub fn apply_selection_to_lines(
	lines: &[Line<'static>],
	selection: &TextSelection,
	area: Rect,
	overlay: Style,
) -> Vec<Line<'static>> {
	lines
		.iter()
		.enumerate()
		.map(|(row, line)| match selection.columns_on_line(row, area) {
			Some((from, to)) => restyle_columns(line, from, to, overlay),
			None => line.clone(),
		})
		.collect()
}

fn restyle_columns(line: &Line<'static>, from: usize, to: usize, overlay: Style) -> Line<'static> {
	let mut spans = Vec::with_capacity(line.spans.len() + 2);
	let mut col = 0usize;

	for span in &line.spans {
		let mut run = String::new();
		let mut run_selected = None;

		for ch in span.content.chars() {
			let selected = col >= from && col < to;
			if run_selected.is_some_and(|prev| prev != selected) {
				spans.push(styled_run(std::mem::take(&mut run), span.style, !selected, overlay));
			}
			run.push(ch);
			run_selected = Some(selected);
			col += ch.width().unwrap_or(0);
		}

		if let Some(selected) = run_selected {
			spans.push(styled_run(run, span.style, selected, overlay));
		}
	}

	Line::from(spans)
}

fn styled_run(text: String, base: Style, selected: bool, overlay: Style) -> Span<'static> {
	Span::styled(text, if selected { base.patch(overlay) } else { base })
}
