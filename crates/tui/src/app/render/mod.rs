pub(crate) mod layout;

use layout::ScreenLayout;
use ratatui::Frame;
use ratatui::layout::Margin;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	Button, TextPanelContext, render_buttons, render_candidate, render_text_panel, wrap_segments,
};

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let screen = ScreenLayout::new(area, self.highlighter.candidate().is_some());

		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(
				self.labels.title.as_str(),
				self.theme.title,
			))),
			screen.title,
		);

		self.render_panel(frame, &screen);
		self.render_buttons(frame, &screen);

		if let Some(candidate) = self.highlighter.candidate() {
			render_candidate(
				frame,
				screen.candidate,
				&self.labels.selected_title,
				&candidate.text,
				&self.theme,
			);
		}

		frame.render_widget(
			Paragraph::new(Span::styled(self.labels.hint.as_str(), self.theme.muted)),
			screen.hint,
		);
	}

	fn render_panel(&mut self, frame: &mut Frame, screen: &ScreenLayout) {
		let inner = screen.panel_inner();
		let width = match self.wrap_width {
			Some(limit) => inner.width.min(limit),
			None => inner.width,
		};

		let segments = self.highlighter.segments();
		self.panel.lines = wrap_segments(&segments, usize::from(width), &self.theme);
		self.panel.viewport_height = usize::from(inner.height);
		self.panel.clamp_scroll();

		let ctx = TextPanelContext {
			lines: &self.panel.lines,
			selection: &self.panel.selection,
			scroll: self.panel.scroll,
			theme: &self.theme,
		};
		self.panel.area = Some(render_text_panel(frame, screen.panel, ctx));
	}

	fn render_buttons(&mut self, frame: &mut Frame, screen: &ScreenLayout) {
		let commit_style = if self.highlighter.can_commit() {
			self.theme.button
		} else {
			self.theme.button_disabled
		};
		let buttons = [
			Button {
				label: &self.labels.commit_label,
				style: commit_style,
			},
			Button {
				label: &self.labels.clear_label,
				style: self.theme.button_danger,
			},
		];

		let rects = render_buttons(frame, screen.buttons, &buttons);
		self.buttons.commit = rects.first().copied();
		self.buttons.clear = rects.get(1).copied();
	}
}
