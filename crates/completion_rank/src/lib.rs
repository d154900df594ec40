//! Subword-aware fuzzy ranking for completion lists.
//!
//! Given a short typed pattern and a list of candidate words, the crate decides which
//! candidates contain the pattern as a case-insensitive subsequence, covers the pattern
//! with contiguous spans of the word, scores that cover and returns the survivors
//! best-first together with highlight spans.
//!
//! The pipeline for a single word is:
//!
//! 1. [`segment_subwords`] marks where `camelCase`, `snake_case` and letter/digit
//!    transitions begin a subword.
//! 2. [`match_pattern`] finds the cover of the pattern, preferring few, long,
//!    subword-aligned spans. Spans never cross a subword boundary.
//! 3. [`score_match`] folds the cover into a single `i64` and builds the highlights.
//!
//! [`Ranker`] runs that pipeline over a candidate list with reusable scratch buffers,
//! honours category filters and a cancellation token, and sorts the result.
//!
//! ```
//! use xeno_completion_rank::{Candidate, rank_candidates};
//!
//! let candidates = [Candidate::new("getHtmlAsync", 0), Candidate::new("alphagamma", 1)];
//! let ranked = rank_candidates("gHA", &candidates);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].index, 0);
//! ```
//!
//! Case folding only covers ASCII letters; any other character must match exactly.

mod chars;
mod r#const;
pub mod config;
pub mod error;
pub mod filter;
pub mod limits;
pub mod matcher;
pub mod rank;
pub mod scorer;
pub mod subword;
mod word_scorer;

#[cfg(test)]
mod properties;

use smallvec::SmallVec;

pub use config::{EmptyPatternOrder, RankConfig};
pub use error::{ConfigError, RankError};
pub use filter::{ActiveFilters, CategoryFilters, FilterKind, FilterMask};
pub use matcher::{MatchedSpan, SpanMatcher, match_pattern};
pub use rank::{Candidate, RankRequest, RankedCandidate, RankedList, Ranker, SelectionHint, rank_candidates};
pub use scorer::{ScoreBreakdown, ScoredMatch, Scoring, score_match};
pub use subword::{SubwordStarts, segment_subwords};
pub use tokio_util::sync::CancellationToken;
pub use word_scorer::WordScorer;

/// A highlighted region of a candidate, in character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub start: u32,
	pub len: u32,
}

impl Span {
	pub const fn new(start: u32, len: u32) -> Self {
		Self { start, len }
	}

	/// Saturates at `u32::MAX`.
	pub const fn end(&self) -> u32 {
		self.start.saturating_add(self.len)
	}
}

/// Highlight spans for one candidate. Most matches need only a handful of spans,
/// so they stay inline.
pub type Highlights = SmallVec<[Span; 4]>;
