use crate::range::HighlightRange;

/// Host capability answering "what text is currently selected?".
///
/// The core only ever reads the selection; it never sets it. Front-ends
/// implement this over whatever their rendering surface offers (a terminal
/// mouse drag, a GUI selection API, a fixed string in tests).
pub trait SelectionSource {
	/// Return the selected text, if any.
	fn selected_text(&self) -> Option<String>;
}

impl SelectionSource for str {
	fn selected_text(&self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl SelectionSource for String {
	fn selected_text(&self) -> Option<String> {
		Some(self.clone())
	}
}

impl SelectionSource for Option<String> {
	fn selected_text(&self) -> Option<String> {
		self.clone()
	}
}

/// A located but not yet committed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSelection {
	pub range: HighlightRange,
	/// The selected text exactly as the host reported it.
	pub text: String,
}

/// Map `selected` back onto `text`.
///
/// The first occurrence wins: a phrase repeated in `text` always binds to its
/// earliest position, whichever copy the user actually dragged over. Empty and
/// whitespace-only selections, and text that does not occur verbatim, yield
/// `None`.
pub fn locate(text: &str, selected: &str) -> Option<CandidateSelection> {
	if selected.trim().is_empty() {
		return None;
	}
	let start = text.find(selected)?;
	let range = HighlightRange::new(text, start, start + selected.len()).ok()?;
	Some(CandidateSelection {
		range,
		text: selected.to_owned(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::FIXED_TEXT;

	#[test]
	fn locates_single_occurrence() {
		let candidate = locate(FIXED_TEXT, "Senior").expect("present");
		assert_eq!(candidate.range, HighlightRange::new(FIXED_TEXT, 15, 21).unwrap());
		assert_eq!(candidate.text, "Senior");
	}

	#[test]
	fn repeated_phrase_binds_to_first_occurrence() {
		let text = "remote work, remote teams";
		let candidate = locate(text, "remote").expect("present");
		assert_eq!(candidate.range.start(), 0);

		// Same result for the full text: "remote" occurs twice, first wins.
		let first = FIXED_TEXT.find("remote").unwrap();
		let candidate = locate(FIXED_TEXT, "remote").unwrap();
		assert_eq!(candidate.range.start(), first);
		assert_ne!(Some(first), FIXED_TEXT.rfind("remote"));
	}

	#[test]
	fn ignores_empty_whitespace_and_unknown_text() {
		assert_eq!(locate(FIXED_TEXT, ""), None);
		assert_eq!(locate(FIXED_TEXT, "   "), None);
		assert_eq!(locate(FIXED_TEXT, "\n\t"), None);
		assert_eq!(locate(FIXED_TEXT, "xyz123"), None);
	}

	#[test]
	fn sources_report_their_text() {
		assert_eq!("abc".selected_text().as_deref(), Some("abc"));
		assert_eq!(String::from("x").selected_text().as_deref(), Some("x"));
		assert_eq!(None::<String>.selected_text(), None);
	}
}
