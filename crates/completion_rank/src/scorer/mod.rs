//! Scoring of a matched cover.
//!
//! The score is a plain `i64`, higher is better. Weights live in [`Scoring`]; their exact
//! values can be tuned, but the ordering they produce is relied upon:
//!
//! - a span beginning on a subword start outweighs an equal-length incidental span,
//! - unmatched characters before the last span cost more than trailing ones,
//! - every subword without a span start, every extra span and every case mismatch
//!   costs points,
//! - a perfect match (same length, same case) is multiplied.

use serde::{Deserialize, Serialize};

use crate::chars::{CaseMatch, case_match};
use crate::matcher::MatchedSpan;
use crate::r#const::*;
use crate::{Highlights, Span};

/// Scoring weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
	/// Score per matched character.
	pub span_char_score: i64,
	/// Multiplier for spans that begin on a subword start.
	pub subword_span_multiplier: i64,
	/// Per unmatched word character before the end of the last span.
	pub passed_char_penalty: i64,
	/// Per unmatched word character after the last span.
	pub trailing_char_penalty: i64,
	/// Per subword that no span starts in.
	pub unmatched_subword_penalty: i64,
	/// Per span.
	pub span_penalty: i64,
	/// Per uppercase pattern character matched by a lowercase word character.
	pub upper_as_lower_penalty: i64,
	/// Per lowercase pattern character matched by an uppercase word character.
	pub lower_as_upper_penalty: i64,
	/// Applied to the whole score of a perfect match.
	pub perfect_match_multiplier: i64,
}

impl Default for Scoring {
	fn default() -> Self {
		Self {
			span_char_score: SPAN_CHAR_SCORE,
			subword_span_multiplier: SUBWORD_SPAN_MULTIPLIER,
			passed_char_penalty: PASSED_CHAR_PENALTY,
			trailing_char_penalty: TRAILING_CHAR_PENALTY,
			unmatched_subword_penalty: UNMATCHED_SUBWORD_PENALTY,
			span_penalty: SPAN_PENALTY,
			upper_as_lower_penalty: UPPER_AS_LOWER_PENALTY,
			lower_as_upper_penalty: LOWER_AS_UPPER_PENALTY,
			perfect_match_multiplier: PERFECT_MATCH_MULTIPLIER,
		}
	}
}

impl Scoring {
	fn span_score(&self, span: &MatchedSpan) -> i64 {
		let score = self.span_char_score * span.len() as i64;
		if span.is_subword_start() { score * self.subword_span_multiplier } else { score }
	}

	/// Folds a breakdown into the final score.
	pub fn total(&self, breakdown: &ScoreBreakdown) -> i64 {
		let mut score = breakdown.span_score;
		score -= self.passed_char_penalty * breakdown.passed_chars as i64;
		score -= self.trailing_char_penalty * breakdown.trailing_chars as i64;
		score -= self.unmatched_subword_penalty * breakdown.unmatched_subwords as i64;
		score -= self.span_penalty * breakdown.spans as i64;
		score -= self.upper_as_lower_penalty * breakdown.upper_as_lower as i64;
		score -= self.lower_as_upper_penalty * breakdown.lower_as_upper as i64;

		if breakdown.is_perfect() {
			score *= self.perfect_match_multiplier;
		}
		score
	}
}

/// The quantities a score is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
	/// Sum of the per-span contributions, before penalties.
	pub span_score: i64,
	pub spans: u32,
	pub passed_chars: u32,
	pub trailing_chars: u32,
	pub unmatched_subwords: u32,
	pub upper_as_lower: u32,
	pub lower_as_upper: u32,
}

impl ScoreBreakdown {
	/// Collects the breakdown of a valid cover.
	///
	/// `spans` must be a cover of `pattern` over `word` as produced by the matcher, and
	/// `subword_count` the subword count of `word`.
	pub fn of(pattern: &[char], word: &[char], spans: &[MatchedSpan], subword_count: u32, scoring: &Scoring) -> Self {
		debug_assert!(!spans.is_empty(), "scoring requires a successful match");
		debug_assert_eq!(spans.iter().map(MatchedSpan::len).sum::<usize>(), pattern.len());

		let mut breakdown = Self {
			spans: spans.len() as u32,
			..Self::default()
		};

		let mut subword_hits = 0;
		for span in spans {
			if span.is_subword_start() {
				subword_hits += 1;
			}
			breakdown.span_score += scoring.span_score(span);

			let word_chars = &word[span.start()..span.end()];
			let pattern_chars = &pattern[span.start_in_pattern()..span.end_in_pattern()];
			for (&w, &p) in word_chars.iter().zip(pattern_chars) {
				match case_match(w, p) {
					CaseMatch::Exact => {}
					CaseMatch::UpperAsLower => breakdown.upper_as_lower += 1,
					CaseMatch::LowerAsUpper => breakdown.lower_as_upper += 1,
				}
			}
		}

		let unmatched = word.len() - pattern.len();
		let last_end = spans.last().map_or(0, MatchedSpan::end);
		breakdown.trailing_chars = (word.len() - last_end) as u32;
		breakdown.passed_chars = (unmatched - breakdown.trailing_chars as usize) as u32;
		breakdown.unmatched_subwords = subword_count.saturating_sub(subword_hits);
		breakdown
	}

	/// Every word character matched, in its exact case.
	pub fn is_perfect(&self) -> bool {
		self.passed_chars == 0 && self.trailing_chars == 0 && self.upper_as_lower == 0 && self.lower_as_upper == 0
	}
}

/// A scored match with its highlight spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
	pub score: i64,
	pub highlights: Highlights,
	pub breakdown: ScoreBreakdown,
}

/// Scores a cover and translates it into highlight spans shifted by `display_offset`.
///
/// Only call this with a cover returned by the matcher for the same pattern and word;
/// there is no failure path.
pub fn score_match(
	pattern: &[char],
	word: &[char],
	spans: &[MatchedSpan],
	subword_count: u32,
	display_offset: u32,
	scoring: &Scoring,
) -> ScoredMatch {
	let breakdown = ScoreBreakdown::of(pattern, word, spans, subword_count, scoring);
	let highlights = spans
		.iter()
		.map(|span| Span::new((span.start() as u32).saturating_add(display_offset), span.len() as u32))
		.collect();

	ScoredMatch {
		score: scoring.total(&breakdown),
		highlights,
		breakdown,
	}
}
