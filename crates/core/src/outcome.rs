use serde::Serialize;

/// One committed highlight as reported when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightRecord {
	pub start: usize,
	pub end: usize,
	pub text: String,
}

/// Committed highlights at the end of a session, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightOutcome {
	pub highlights: Vec<HighlightRecord>,
}

impl HighlightOutcome {
	pub fn is_empty(&self) -> bool {
		self.highlights.is_empty()
	}
}
