use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Columns between neighbouring buttons.
pub const BUTTON_GAP: u16 = 2;

/// Narrowest a squeezed button gets: one character between the padding.
const MIN_BUTTON_WIDTH: u16 = 3;

/// A clickable label drawn as ` label ` on a filled background.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
	pub label: &'a str,
	pub style: Style,
}

impl Button<'_> {
	fn width(&self) -> u16 {
		u16::try_from(self.label.width() + 2).unwrap_or(u16::MAX)
	}

	/// ` label ` padded into `width` columns, cut with an ellipsis if needed.
	fn text_for(&self, width: u16) -> String {
		let inner = usize::from(width.saturating_sub(2));
		if self.label.width() <= inner {
			return format!(" {} ", self.label);
		}
		let (head, _) = self.label.unicode_truncate(inner.saturating_sub(1));
		format!(" {head}… ")
	}
}

/// Widths for `buttons` on a row `available` columns wide.
///
/// When the natural widths overflow, every button is squeezed to an equal
/// share of the row so all of them stay visible.
fn fitted_widths(available: u16, buttons: &[Button<'_>]) -> Vec<u16> {
	let natural: Vec<u16> = buttons.iter().map(Button::width).collect();
	let count = u16::try_from(buttons.len()).unwrap_or(u16::MAX);
	let gaps = BUTTON_GAP.saturating_mul(count.saturating_sub(1));
	let total: u32 = natural.iter().map(|&width| u32::from(width)).sum::<u32>() + u32::from(gaps);
	if count == 0 || total <= u32::from(available) {
		return natural;
	}

	let share = (available.saturating_sub(gaps) / count).max(MIN_BUTTON_WIDTH);
	natural.into_iter().map(|width| width.min(share)).collect()
}

/// Lay buttons out left to right on the first row of `area`.
///
/// Labels are shortened when the row is narrow. Buttons that still do not fit
/// get a zero-width rectangle so they can never be hit.
pub fn layout_buttons(area: Rect, buttons: &[Button<'_>]) -> Vec<Rect> {
	let right = area.x.saturating_add(area.width);
	let mut x = area.x;
	fitted_widths(area.width, buttons)
		.into_iter()
		.map(|width| {
			let rect = if area.height > 0 && x.saturating_add(width) <= right {
				Rect::new(x, area.y, width, 1)
			} else {
				Rect::new(x.min(right), area.y, 0, 0)
			};
			x = x.saturating_add(width).saturating_add(BUTTON_GAP);
			rect
		})
		.collect()
}

/// Draw `buttons` and return their hit areas in the same order.
pub fn render_buttons(frame: &mut Frame, area: Rect, buttons: &[Button<'_>]) -> Vec<Rect> {
	let rects = layout_buttons(area, buttons);
	for (button, rect) in buttons.iter().zip(&rects) {
		if rect.width == 0 {
			continue;
		}
		let span = Span::styled(button.text_for(rect.width), button.style);
		frame.render_widget(span, *rect);
	}
	rects
}
