use crate::limits::{MAX_PATTERN_LEN, MAX_WORD_LEN, load_chars};
use crate::matcher::SpanMatcher;
use crate::scorer::{ScoredMatch, Scoring, score_match};
use crate::subword::SubwordStarts;

/// Scores one pattern against many words.
///
/// Holds every buffer the segment, match and score steps need. Create one per thread and
/// keep it around; after warming up to the longest word, scoring allocates nothing but
/// the highlight list of matches with more than a few spans.
#[derive(Debug, Default)]
pub struct WordScorer {
	pattern: Vec<char>,
	word: Vec<char>,
	subwords: SubwordStarts,
	matcher: SpanMatcher,
	scoring: Scoring,
}

impl WordScorer {
	pub fn new(scoring: Scoring) -> Self {
		Self {
			scoring,
			..Self::default()
		}
	}

	pub fn scoring(&self) -> &Scoring {
		&self.scoring
	}

	/// Loads the pattern for the following [`score_word`](Self::score_word) calls,
	/// truncated to [`MAX_PATTERN_LEN`] characters.
	pub fn set_pattern(&mut self, pattern: &str) -> &[char] {
		load_chars(pattern, MAX_PATTERN_LEN, &mut self.pattern);
		&self.pattern
	}

	pub fn pattern(&self) -> &[char] {
		&self.pattern
	}

	/// Matches and scores `word` against the loaded pattern.
	///
	/// Returns `None` when the pattern is empty or is not a subsequence of the word.
	/// Highlights are shifted by `display_offset`.
	pub fn score_word(&mut self, word: &str, display_offset: u32) -> Option<ScoredMatch> {
		if self.pattern.is_empty() {
			return None;
		}

		load_chars(word, MAX_WORD_LEN, &mut self.word);
		if self.word.len() < self.pattern.len() {
			return None;
		}

		let subword_count = self.subwords.recompute(&self.word);
		let spans = self.matcher.find_cover(&self.pattern, &self.word, &self.subwords)?;
		Some(score_match(&self.pattern, &self.word, spans, subword_count, display_offset, &self.scoring))
	}
}
