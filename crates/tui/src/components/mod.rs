//! Widgets making up the highlighter screen.

/// Clickable buttons.
pub mod buttons;
/// The box showing the uncommitted selection.
pub mod candidate;
/// The paragraph panel, its wrapping and mouse selection.
pub mod text_panel;

use ratatui::layout::Rect;

pub use buttons::{Button, render_buttons};
pub use candidate::{CANDIDATE_HEIGHT, render_candidate};
pub use text_panel::{
	PanelSelection, TextPanelContext, TextSelection, render_text_panel, wrap_segments,
};

/// Whether the screen cell at (`column`, `row`) lies inside `area`.
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
