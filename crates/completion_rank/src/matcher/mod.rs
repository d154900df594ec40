//! Span matching.
//!
//! Finds a cover of the pattern by disjoint, contiguous spans of the word. The search is
//! a single deterministic pass:
//!
//! 1. Prospecting bounds where each pattern character can match at all.
//! 2. Every diagonal (word offset minus pattern offset) inside those bounds is walked and
//!    its runs of matching characters become candidate spans. A run is cut at every
//!    subword start, so no span crosses a subword boundary.
//! 3. Candidates are reconciled into a cover in discovery order. Subword-aligned spans
//!    and longer spans displace weaker ones; losers are trimmed, not dropped, where they
//!    only partially overlap.

mod cover;
mod prospect;

use std::fmt;

use self::prospect::CharRange;
use crate::limits::{MAX_PATTERN_LEN, MAX_WORD_LEN};
use crate::subword::SubwordStarts;

/// A run of consecutive matched characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchedSpan {
	start: u16,
	start_in_pattern: u16,
	len: u16,
	subword_start: bool,
}

impl MatchedSpan {
	pub(crate) fn new(start: usize, start_in_pattern: usize, len: usize, subword_start: bool) -> Self {
		debug_assert!(len > 0);
		debug_assert!(start + len <= MAX_WORD_LEN);
		debug_assert!(start_in_pattern + len <= MAX_PATTERN_LEN);
		Self {
			start: start as u16,
			start_in_pattern: start_in_pattern as u16,
			len: len as u16,
			subword_start,
		}
	}

	/// Start in the word.
	#[inline]
	pub fn start(&self) -> usize {
		self.start as usize
	}

	#[inline]
	pub fn end(&self) -> usize {
		self.start() + self.len()
	}

	#[inline]
	pub fn start_in_pattern(&self) -> usize {
		self.start_in_pattern as usize
	}

	#[inline]
	pub fn end_in_pattern(&self) -> usize {
		self.start_in_pattern() + self.len()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.len as usize
	}

	/// Always `false`; spans are non-empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Whether the span begins on a subword start of the word.
	#[inline]
	pub fn is_subword_start(&self) -> bool {
		self.subword_start
	}

	/// Drops `count` characters from the front. The remainder starts inside a subword.
	pub(crate) fn trim_front(self, count: usize) -> Self {
		debug_assert!(count < self.len());
		Self::new(self.start() + count, self.start_in_pattern() + count, self.len() - count, false)
	}

	/// Drops `count` characters from the back.
	pub(crate) fn trim_back(self, count: usize) -> Self {
		debug_assert!(count < self.len());
		Self::new(self.start(), self.start_in_pattern(), self.len() - count, self.subword_start)
	}
}

impl fmt::Debug for MatchedSpan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"word[{}..{}] ~ pattern[{}..{}]{}",
			self.start(),
			self.end(),
			self.start_in_pattern(),
			self.end_in_pattern(),
			if self.subword_start { " (subword)" } else { "" }
		)
	}
}

/// Reusable scratch for span matching.
///
/// Buffers grow to the longest pattern and word seen and are reused afterwards, so a
/// matcher kept across calls does not allocate on the hot path.
#[derive(Debug, Default)]
pub struct SpanMatcher {
	ranges: Vec<CharRange>,
	candidates: Vec<MatchedSpan>,
	cover: Vec<MatchedSpan>,
	span_of: Vec<u16>,
}

impl SpanMatcher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Covers `pattern` with spans of `word`, or returns `None` if the pattern is not a
	/// fuzzy-case subsequence of the word.
	///
	/// The returned spans are ordered by pattern position, pairwise disjoint and cover
	/// every pattern index exactly once. Both inputs must already be within
	/// [`MAX_PATTERN_LEN`] and [`MAX_WORD_LEN`], and `subwords` must have been computed
	/// for `word`.
	pub fn find_cover(&mut self, pattern: &[char], word: &[char], subwords: &SubwordStarts) -> Option<&[MatchedSpan]> {
		debug_assert!(!pattern.is_empty(), "empty patterns bypass matching");
		debug_assert!(pattern.len() <= MAX_PATTERN_LEN);
		debug_assert!(word.len() <= MAX_WORD_LEN);
		debug_assert_eq!(subwords.len(), word.len());

		if pattern.is_empty() || word.len() < pattern.len() {
			return None;
		}

		if !prospect::prospect(pattern, word, &mut self.ranges) {
			return None;
		}

		cover::discover(pattern, word, subwords, &self.ranges, &mut self.candidates);
		let covered = cover::reconcile(&self.candidates, pattern.len(), &mut self.cover, &mut self.span_of);
		if covered != pattern.len() {
			tracing::trace!(covered, pattern_len = pattern.len(), "reconciliation left a gap, using greedy cover");
			cover::greedy_cover(&self.ranges, subwords, &mut self.cover);
		}

		debug_assert!(cover::is_valid_cover(&self.cover, pattern.len()));
		Some(&self.cover)
	}
}

/// Covers `pattern` with spans of `word`.
///
/// Inputs longer than the limits in [`crate::limits`] are truncated. Returns `None` for
/// an empty pattern or when the pattern is not a subsequence of the word.
pub fn match_pattern(pattern: &[char], word: &[char], subwords: &SubwordStarts) -> Option<Vec<MatchedSpan>> {
	let pattern = &pattern[..pattern.len().min(MAX_PATTERN_LEN)];
	if pattern.is_empty() {
		return None;
	}

	let word = &word[..word.len().min(MAX_WORD_LEN)];
	if word.len() != subwords.len() {
		let subwords = crate::subword::segment_subwords(word);
		return SpanMatcher::new().find_cover(pattern, word, &subwords).map(<[_]>::to_vec);
	}

	SpanMatcher::new().find_cover(pattern, word, subwords).map(<[_]>::to_vec)
}
