use serde::Serialize;
use thiserror::Error;

/// Half-open byte range `[start, end)` into the highlighted text.
///
/// Only [`HighlightRange::new`] builds one, so both ends sit on `char`
/// boundaries of the text it was checked against and `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightRange {
	start: usize,
	end: usize,
}

/// Reasons a pair of offsets cannot form a [`HighlightRange`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
	#[error("range {start}..{end} is empty or reversed")]
	Empty { start: usize, end: usize },
	#[error("range end {end} exceeds text length {len}")]
	OutOfBounds { end: usize, len: usize },
	#[error("offset {offset} does not fall on a character boundary")]
	NotCharBoundary { offset: usize },
}

impl HighlightRange {
	/// Validate `start..end` against `text`.
	pub fn new(text: &str, start: usize, end: usize) -> Result<Self, RangeError> {
		if start >= end {
			return Err(RangeError::Empty { start, end });
		}
		if end > text.len() {
			return Err(RangeError::OutOfBounds {
				end,
				len: text.len(),
			});
		}
		for offset in [start, end] {
			if !text.is_char_boundary(offset) {
				return Err(RangeError::NotCharBoundary { offset });
			}
		}
		Ok(Self { start, end })
	}

	/// Range without any checks, for tests that build many ranges at once.
	#[cfg(test)]
	pub(crate) fn unchecked(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn end(&self) -> usize {
		self.end
	}

	/// Whether this range can slice `text`.
	pub fn fits(&self, text: &str) -> bool {
		text.get(self.start..self.end).is_some()
	}

	/// Number of bytes covered.
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start >= self.end
	}

	/// Slice `text` with this range.
	///
	/// `text` must be the string the range was validated against.
	pub fn slice<'a>(&self, text: &'a str) -> &'a str {
		&text[self.start..self.end]
	}
}
