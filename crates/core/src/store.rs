use crate::range::HighlightRange;

/// Committed highlights in commit order.
///
/// Ranges are neither deduplicated nor merged; the only mutations are
/// appending a range and clearing everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
	ranges: Vec<HighlightRange>,
}

impl HighlightSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, range: HighlightRange) {
		self.ranges.push(range);
	}

	pub fn clear(&mut self) {
		self.ranges.clear();
	}

	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	pub fn as_slice(&self) -> &[HighlightRange] {
		&self.ranges
	}

	pub fn iter(&self) -> std::slice::Iter<'_, HighlightRange> {
		self.ranges.iter()
	}

	/// Copy of the ranges ordered by `start`, ties kept in commit order.
	pub fn sorted(&self) -> Vec<HighlightRange> {
		let mut sorted = self.ranges.clone();
		sorted.sort_by_key(HighlightRange::start);
		sorted
	}
}

impl<'a> IntoIterator for &'a HighlightSet {
	type Item = &'a HighlightRange;
	type IntoIter = std::slice::Iter<'a, HighlightRange>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl FromIterator<HighlightRange> for HighlightSet {
	fn from_iter<I: IntoIterator<Item = HighlightRange>>(iter: I) -> Self {
		Self {
			ranges: iter.into_iter().collect(),
		}
	}
}
