use hilite_core::Highlighter;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use super::extract::extract_selected_text;
use super::highlight::apply_selection_to_lines;
use super::state::TextSelection;
use super::PanelSelection;

fn finished(anchor: (u16, u16), focus: (u16, u16)) -> TextSelection {
	TextSelection {
		anchor: Some(anchor),
		focus: Some(focus),
		anchor_scroll: 0,
		focus_scroll: 0,
		selecting: false,
		active: true,
	}
}

fn wrapped() -> Vec<Line<'static>> {
	vec![Line::from("alpha beta "), Line::from("gamma")]
}

#[test]
fn start_update_finish() {
	let mut sel = TextSelection::new();
	assert!(!sel.has_selection());

	sel.start(10, 5, 0);
	assert!(sel.selecting);
	assert!(!sel.active);

	sel.update(20, 5, 0);
	assert_eq!(sel.focus, Some((20, 5)));

	sel.finish();
	assert!(!sel.selecting);
	assert!(sel.active);
}

#[test]
fn click_without_drag_is_not_a_selection() {
	let mut sel = TextSelection::new();
	sel.start(10, 5, 0);
	sel.finish();
	assert!(!sel.has_selection());
}

#[test]
fn update_after_release_is_ignored() {
	let mut sel = TextSelection::new();
	sel.start(1, 1, 0);
	sel.update(4, 1, 0);
	sel.finish();
	sel.update(9, 9, 0);
	assert_eq!(sel.focus, Some((4, 1)));
}

#[test]
fn bounds_are_ordered_and_local() {
	let area = Rect::new(5, 5, 50, 20);
	let forward = finished((10, 7), (20, 7));
	let backward = finished((20, 7), (10, 7));
	assert_eq!(forward.normalized_bounds(area), Some(((5, 2), (15, 2))));
	assert_eq!(backward.normalized_bounds(area), forward.normalized_bounds(area));
}

#[test]
fn bounds_include_scroll_offset() {
	let area = Rect::new(0, 0, 80, 10);
	let mut sel = finished((5, 3), (10, 4));
	sel.anchor_scroll = 10;
	sel.focus_scroll = 12;
	assert_eq!(sel.normalized_bounds(area), Some(((5, 13), (10, 16))));
}

#[test]
fn extracts_single_line_span() {
	let area = Rect::new(0, 0, 20, 5);
	let text = extract_selected_text(&wrapped(), &finished((6, 0), (10, 0)), area);
	assert_eq!(text.as_deref(), Some("beta"));
}

#[test]
fn wrapped_rows_join_without_separator() {
	let area = Rect::new(0, 0, 20, 5);
	let text = extract_selected_text(&wrapped(), &finished((3, 1), (6, 0)), area);
	assert_eq!(text.as_deref(), Some("beta gam"));
}

#[test]
fn selection_past_line_end_is_clamped() {
	let area = Rect::new(2, 1, 20, 5);
	let text = extract_selected_text(&wrapped(), &finished((2, 2), (19, 2)), area);
	assert_eq!(text.as_deref(), Some("gamma"));
}

#[test]
fn selection_below_text_extracts_nothing() {
	let area = Rect::new(0, 0, 20, 5);
	let text = extract_selected_text(&wrapped(), &finished((0, 3), (5, 4)), area);
	assert_eq!(text, None);
}

#[test]
fn overlay_touches_only_selected_columns() {
	let area = Rect::new(0, 0, 20, 5);
	let overlay = Style::new().bg(Color::LightBlue);
	let lines = apply_selection_to_lines(&wrapped(), &finished((6, 0), (2, 1)), area, overlay);

	let first: Vec<_> = lines[0]
		.spans
		.iter()
		.map(|span| (span.content.as_ref(), span.style == overlay))
		.collect();
	assert_eq!(first, [("alpha ", false), ("beta ", true)]);

	let second: Vec<_> = lines[1]
		.spans
		.iter()
		.map(|span| (span.content.as_ref(), span.style == overlay))
		.collect();
	assert_eq!(second, [("ga", true), ("mma", false)]);
}

#[test]
fn panel_selection_feeds_the_highlighter() {
	let lines = vec![Line::from("Results-driven Senior "), Line::from("Frontend")];
	let area = Rect::new(1, 1, 30, 4);
	let selection = finished((16, 1), (22, 1));

	let mut highlighter = Highlighter::new();
	let source = PanelSelection {
		lines: &lines,
		selection: &selection,
		area,
	};
	assert!(highlighter.on_selection_completed(&source));
	let candidate = highlighter.candidate().expect("candidate");
	assert_eq!(candidate.text, "Senior");
	assert_eq!((candidate.range.start(), candidate.range.end()), (15, 21));
}
