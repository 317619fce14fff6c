//! Mouse text selection over the wrapped paragraph: drag state, extraction
//! of the selected text, and the selection overlay.

pub mod extract;
pub mod highlight;
pub mod state;

use hilite_core::SelectionSource;
use ratatui::layout::Rect;
use ratatui::text::Line;

pub use extract::extract_selected_text;
pub use highlight::apply_selection_to_lines;
pub use state::TextSelection;

/// The terminal's answer to "what is selected right now": the text under the
/// mouse drag, read back from the lines as they were drawn.
pub struct PanelSelection<'a> {
	pub lines: &'a [Line<'static>],
	pub selection: &'a TextSelection,
	pub area: Rect,
}

impl SelectionSource for PanelSelection<'_> {
	fn selected_text(&self) -> Option<String> {
		extract_selected_text(self.lines, self.selection, self.area)
	}
}

#[cfg(test)]
mod tests;
