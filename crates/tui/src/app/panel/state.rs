//! Text panel state: wrapped lines, scrolling and the mouse selection.

use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::components::{PanelSelection, TextSelection, point_in_rect};

#[derive(Debug, Default)]
pub(crate) struct PanelState {
	/// Lines as last drawn, one entry per wrapped row of the paragraph.
	pub lines: Vec<Line<'static>>,
	/// Index of the first visible line.
	pub scroll: usize,
	pub viewport_height: usize,
	/// Inner text area from the last draw.
	pub area: Option<Rect>,
	pub selection: TextSelection,
}

impl PanelState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_scroll(&self) -> usize {
		self.lines.len().saturating_sub(self.viewport_height.max(1))
	}

	pub fn scroll_up(&mut self, amount: usize) {
		self.scroll = self.scroll.saturating_sub(amount);
	}

	pub fn scroll_down(&mut self, amount: usize) {
		self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
	}

	pub fn clamp_scroll(&mut self) {
		self.scroll = self.scroll.min(self.max_scroll());
	}

	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn begin_selection(&mut self, column: u16, row: u16) {
		self.selection.start(column, row, self.scroll);
	}

	/// Follow a drag, clamping to the text area and scrolling when the
	/// pointer leaves it vertically.
	pub fn drag_selection(&mut self, column: u16, row: u16) {
		let Some(area) = self.area else {
			return;
		};
		if !self.selection.selecting || area.height == 0 {
			return;
		}

		let bottom = area.y + area.height - 1;
		if row < area.y {
			self.scroll_up(1);
		} else if row > bottom {
			self.scroll_down(1);
		}

		// One past the last column so the final character can be included.
		let column = column.clamp(area.x, area.x.saturating_add(area.width));
		let row = row.clamp(area.y, bottom);
		self.selection.update(column, row, self.scroll);
	}

	/// Selection source over the lines as drawn.
	pub fn selection_source(&self) -> Option<PanelSelection<'_>> {
		Some(PanelSelection {
			lines: &self.lines,
			selection: &self.selection,
			area: self.area?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn panel_with_lines(count: usize, viewport: usize) -> PanelState {
		PanelState {
			lines: (0..count).map(|i| Line::from(format!("line {i}"))).collect(),
			viewport_height: viewport,
			area: Some(Rect::new(2, 2, 20, viewport as u16)),
			..PanelState::new()
		}
	}

	#[test]
	fn scrolling_is_bounded() {
		let mut panel = panel_with_lines(10, 4);
		panel.scroll_down(100);
		assert_eq!(panel.scroll, 6);
		panel.scroll_up(2);
		assert_eq!(panel.scroll, 4);
		panel.scroll_up(100);
		assert_eq!(panel.scroll, 0);
	}

	#[test]
	fn short_text_never_scrolls() {
		let mut panel = panel_with_lines(2, 4);
		panel.scroll_down(3);
		assert_eq!(panel.scroll, 0);
	}

	#[test]
	fn drag_is_clamped_to_text_area() {
		let mut panel = panel_with_lines(3, 4);
		panel.begin_selection(3, 2);
		panel.drag_selection(80, 3);
		assert_eq!(panel.selection.focus, Some((22, 3)));
		panel.drag_selection(0, 0);
		assert_eq!(panel.selection.focus, Some((2, 2)));
	}

	#[test]
	fn drag_past_bottom_scrolls() {
		let mut panel = panel_with_lines(10, 4);
		panel.begin_selection(3, 2);
		panel.drag_selection(5, 9);
		assert_eq!(panel.scroll, 1);
		assert_eq!(panel.selection.focus, Some((5, 5)));
		assert_eq!(panel.selection.focus_scroll, 1);
		assert_eq!(panel.selection.anchor_scroll, 0);
	}

	#[test]
	fn drag_without_press_does_nothing() {
		let mut panel = panel_with_lines(3, 4);
		panel.drag_selection(5, 3);
		assert_eq!(panel.selection, TextSelection::new());
	}
}
