use ratatui::layout::Rect;

/// A mouse drag over the text panel.
///
/// Positions are screen coordinates as reported by the terminal. The panel
/// scroll offset at each end is recorded so the selection stays attached to
/// the same text when the panel scrolls mid-drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSelection {
	/// Where the drag began (column, row).
	pub anchor: Option<(u16, u16)>,
	/// Where the drag currently is (column, row).
	pub focus: Option<(u16, u16)>,
	pub anchor_scroll: usize,
	pub focus_scroll: usize,
	/// Button still held.
	pub selecting: bool,
	/// Released with anchor and focus apart.
	pub active: bool,
}

impl TextSelection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Begin a drag at the given screen position.
	pub fn start(&mut self, col: u16, row: u16, scroll: usize) {
		*self = Self {
			anchor: Some((col, row)),
			focus: Some((col, row)),
			anchor_scroll: scroll,
			focus_scroll: scroll,
			selecting: true,
			active: false,
		};
	}

	/// Move the free end of an ongoing drag.
	pub fn update(&mut self, col: u16, row: u16, scroll: usize) {
		if self.selecting {
			self.focus = Some((col, row));
			self.focus_scroll = scroll;
		}
	}

	/// Release the mouse button. A click without movement selects nothing.
	pub fn finish(&mut self) {
		if !self.selecting {
			return;
		}
		self.selecting = false;
		self.active = matches!((self.anchor, self.focus), (Some(a), Some(f)) if a != f);
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn has_selection(&self) -> bool {
		self.selecting || self.active
	}

	/// Start and end of the selection in content coordinates (column within
	/// `area`, line index including scroll), ordered so start precedes end.
	/// The end column is exclusive.
	pub fn normalized_bounds(&self, area: Rect) -> Option<((usize, usize), (usize, usize))> {
		let to_content = |(col, row): (u16, u16), scroll: usize| {
			(
				usize::from(col.saturating_sub(area.x)),
				usize::from(row.saturating_sub(area.y)) + scroll,
			)
		};
		let anchor = to_content(self.anchor?, self.anchor_scroll);
		let focus = to_content(self.focus?, self.focus_scroll);

		if (anchor.1, anchor.0) <= (focus.1, focus.0) {
			Some((anchor, focus))
		} else {
			Some((focus, anchor))
		}
	}

	/// Selected column span `[start, end)` on content line `row`, if any.
	/// `usize::MAX` as the end means "to the end of the line".
	pub fn columns_on_line(&self, row: usize, area: Rect) -> Option<(usize, usize)> {
		if !self.has_selection() {
			return None;
		}
		let (start, end) = self.normalized_bounds(area)?;
		if row < start.1 || row > end.1 {
			return None;
		}
		let from = if row == start.1 { start.0 } else { 0 };
		let to = if row == end.1 { end.0 } else { usize::MAX };
		(from < to).then_some((from, to))
	}
}
