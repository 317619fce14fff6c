use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Rows taken by the candidate box, borders included.
pub const CANDIDATE_HEIGHT: u16 = 3;

/// Quote `text` for display, truncating with an ellipsis to `width` columns.
pub fn quoted_preview(text: &str, width: usize) -> String {
	let quoted = format!("\"{text}\"");
	if quoted.width() <= width {
		return quoted;
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = quoted.unicode_truncate(width - 1);
	format!("{head}…")
}

/// Draw the "selected text" box showing the uncommitted selection.
pub fn render_candidate(frame: &mut Frame, area: Rect, title: &str, text: &str, theme: &Theme) {
	let block = Block::bordered()
		.border_style(theme.border)
		.title(Span::styled(format!(" {title} "), theme.title));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let preview = quoted_preview(text, usize::from(inner.width));
	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(preview, theme.muted))),
		inner,
	);
}
