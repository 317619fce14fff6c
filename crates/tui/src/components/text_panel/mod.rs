//! The bordered paragraph the user selects from.

pub mod selection;
pub mod wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub use selection::{PanelSelection, TextSelection};
pub use wrap::{line_text, segment_style, wrap_segments};

use self::selection::apply_selection_to_lines;
use crate::style::Theme;

/// Inputs for drawing the text panel.
pub struct TextPanelContext<'a> {
	/// Wrapped lines for the whole paragraph.
	pub lines: &'a [Line<'static>],
	pub selection: &'a TextSelection,
	/// Index of the first visible line.
	pub scroll: usize,
	pub theme: &'a Theme,
}

/// Draw the panel into `area` and return the inner rectangle holding text.
pub fn render_text_panel(frame: &mut Frame, area: Rect, ctx: TextPanelContext<'_>) -> Rect {
	let block = Block::bordered().border_style(ctx.theme.border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let overlaid = apply_selection_to_lines(ctx.lines, ctx.selection, inner, ctx.theme.selection);
	let visible: Vec<Line<'static>> = overlaid
		.into_iter()
		.skip(ctx.scroll)
		.take(usize::from(inner.height))
		.collect();
	frame.render_widget(Paragraph::new(visible).style(ctx.theme.text), inner);

	inner
}
