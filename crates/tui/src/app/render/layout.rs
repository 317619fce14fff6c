use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::components::CANDIDATE_HEIGHT;

/// Regions of the highlighter screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenLayout {
	pub title: Rect,
	/// The bordered text panel, borders included.
	pub panel: Rect,
	pub buttons: Rect,
	/// Zero-height while there is no candidate to show.
	pub candidate: Rect,
	pub hint: Rect,
}

impl ScreenLayout {
	pub(crate) fn new(area: Rect, show_candidate: bool) -> Self {
		let candidate_height = if show_candidate { CANDIDATE_HEIGHT } else { 0 };
		let [title, panel, buttons, candidate, hint] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
			Constraint::Length(candidate_height),
			Constraint::Length(1),
		])
		.areas(area);

		Self {
			title,
			panel,
			buttons,
			candidate,
			hint,
		}
	}

	/// Area inside the panel borders.
	pub(crate) fn panel_inner(&self) -> Rect {
		self.panel.inner(Margin {
			vertical: 1,
			horizontal: 1,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panel_takes_remaining_height() {
		let layout = ScreenLayout::new(Rect::new(1, 0, 78, 24), false);
		assert_eq!(layout.title, Rect::new(1, 0, 78, 1));
		assert_eq!(layout.panel, Rect::new(1, 1, 78, 21));
		assert_eq!(layout.buttons, Rect::new(1, 22, 78, 1));
		assert_eq!(layout.candidate.height, 0);
		assert_eq!(layout.hint, Rect::new(1, 23, 78, 1));
		assert_eq!(layout.panel_inner(), Rect::new(2, 2, 76, 19));
	}

	#[test]
	fn candidate_box_shrinks_panel() {
		let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), true);
		assert_eq!(layout.panel.height, 18);
		assert_eq!(layout.candidate, Rect::new(0, 20, 80, CANDIDATE_HEIGHT));
	}
}
