use hilite_core::HighlightOutcome;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::App;
use crate::components::point_in_rect;

impl App {
	/// Process a key press. Returns the outcome once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<HighlightOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Enter | KeyCode::Char('h') => self.commit_selection(),
			KeyCode::Char('c') | KeyCode::Delete => self.clear_highlights(),
			KeyCode::Up => self.panel.scroll_up(1),
			KeyCode::Down => self.panel.scroll_down(1),
			KeyCode::PageUp => self.panel.scroll_up(self.panel.viewport_height.max(1)),
			KeyCode::PageDown => self.panel.scroll_down(self.panel.viewport_height.max(1)),
			_ => {}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp if self.panel.contains(column, row) => {
				self.panel.scroll_up(3);
			}
			MouseEventKind::ScrollDown if self.panel.contains(column, row) => {
				self.panel.scroll_down(3);
			}
			MouseEventKind::Down(MouseButton::Left) if hits(self.buttons.commit, column, row) => {
				self.commit_selection();
			}
			MouseEventKind::Down(MouseButton::Left) if hits(self.buttons.clear, column, row) => {
				self.clear_highlights();
			}
			MouseEventKind::Down(MouseButton::Left) if self.panel.contains(column, row) => {
				self.panel.begin_selection(column, row);
			}
			MouseEventKind::Down(MouseButton::Left) => {
				self.panel.selection.clear();
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				self.panel.drag_selection(column, row);
			}
			MouseEventKind::Up(MouseButton::Left) if self.panel.selection.selecting => {
				self.panel.drag_selection(column, row);
				self.complete_selection();
			}
			_ => {}
		}
	}
}

fn hits(area: Option<Rect>, column: u16, row: u16) -> bool {
	area.is_some_and(|area| point_in_rect(column, row, area))
}
