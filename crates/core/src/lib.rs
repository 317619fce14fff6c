//! Core state for the `hilite` text highlighter.
//!
//! The crate is UI agnostic: it knows the fixed paragraph, how a selection
//! reported by the host maps back onto it, which ranges were committed, and how
//! to split the paragraph into plain and highlighted segments. Front-ends plug
//! their notion of "current selection" in through [`SelectionSource`].

pub mod highlighter;
pub mod outcome;
pub mod range;
pub mod segment;
pub mod selection;
pub mod store;
pub mod text;

pub use highlighter::Highlighter;
pub use outcome::{HighlightOutcome, HighlightRecord};
pub use range::{HighlightRange, RangeError};
pub use segment::{OverlapMode, Segment, SegmentKind, render_segments, render_segments_with};
pub use selection::{CandidateSelection, SelectionSource, locate};
pub use store::HighlightSet;
pub use text::FIXED_TEXT;
