use proptest::prelude::*;

use crate::chars::fuzzy_eq;
use crate::{Candidate, Scoring, WordScorer, match_pattern, rank_candidates, score_match, segment_subwords};

fn is_fuzzy_subsequence(pattern: &[char], word: &[char]) -> bool {
	let mut rest = word.iter();
	pattern.iter().all(|&p| rest.any(|&w| fuzzy_eq(w, p)))
}

/// A word plus a pattern picked from it, with some characters flipped in case.
fn arb_word_and_subsequence() -> impl Strategy<Value = (String, String)> {
	("[a-zA-Z_0-9]{1,24}", prop::collection::vec((any::<bool>(), any::<bool>()), 24)).prop_filter_map(
		"pattern must be non-empty",
		|(word, picks)| {
			let pattern: String = word
				.chars()
				.zip(picks)
				.filter(|&(_, (keep, _))| keep)
				.map(|(c, (_, flip))| if flip { flip_case(c) } else { c })
				.collect();
			(!pattern.is_empty()).then_some((word, pattern))
		},
	)
}

fn flip_case(c: char) -> char {
	if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() }
}

proptest! {
	/// Every subsequence is found, and the cover spells the pattern without crossing a subword start.
	#[test]
	fn prop_cover_spells_pattern((word, pattern) in arb_word_and_subsequence()) {
		let word: Vec<char> = word.chars().collect();
		let pattern: Vec<char> = pattern.chars().collect();
		let subwords = segment_subwords(&word);

		let spans = match_pattern(&pattern, &word, &subwords);
		prop_assert!(spans.is_some(), "subsequence must match");
		let spans = spans.unwrap_or_default();

		let mut next_in_pattern = 0;
		let mut next_in_word = 0;
		for span in &spans {
			prop_assert_eq!(span.start_in_pattern(), next_in_pattern);
			prop_assert!(span.start() >= next_in_word);
			prop_assert_eq!(span.is_subword_start(), subwords.is_start(span.start()));
			prop_assert!((span.start() + 1..span.end()).all(|i| !subwords.is_start(i)));
			for (w, p) in word[span.start()..span.end()].iter().zip(&pattern[span.start_in_pattern()..span.end_in_pattern()]) {
				prop_assert!(fuzzy_eq(*w, *p));
			}
			next_in_pattern = span.end_in_pattern();
			next_in_word = span.end();
		}
		prop_assert_eq!(next_in_pattern, pattern.len());
	}

	/// A match is reported exactly when the pattern is a case-folded subsequence.
	#[test]
	fn prop_match_iff_subsequence(word in "[a-zA-Z_0-9]{0,16}", pattern in "[a-zA-Z_]{1,5}") {
		let word: Vec<char> = word.chars().collect();
		let pattern: Vec<char> = pattern.chars().collect();
		let matched = match_pattern(&pattern, &word, &segment_subwords(&word));
		prop_assert_eq!(matched.is_some(), is_fuzzy_subsequence(&pattern, &word));
	}

	/// Scratch reuse never leaks state between words.
	#[test]
	fn prop_scoring_is_deterministic((word, pattern) in arb_word_and_subsequence(), other in "[a-zA-Z_0-9]{0,24}") {
		let mut fresh = WordScorer::default();
		fresh.set_pattern(&pattern);
		let expected = fresh.score_word(&word, 0);

		let mut reused = WordScorer::default();
		reused.set_pattern(&pattern);
		let _ = reused.score_word(&other, 3);
		prop_assert_eq!(reused.score_word(&word, 0), expected.clone());

		let word_chars: Vec<char> = word.chars().collect();
		let pattern_chars: Vec<char> = pattern.chars().collect();
		let subwords = segment_subwords(&word_chars);
		let spans = match_pattern(&pattern_chars, &word_chars, &subwords).unwrap_or_default();
		let direct = score_match(&pattern_chars, &word_chars, &spans, subwords.count(), 0, &Scoring::default());
		prop_assert_eq!(Some(direct), expected);
	}

	/// Starting the match on a subword boundary always scores higher.
	#[test]
	fn prop_subword_alignment_wins(prefix in "[xyz]{0,4}", pattern in "[abc]{1,4}") {
		let aligned = format!("{prefix}_{pattern}");
		let buried = format!("{prefix}x{pattern}");

		let mut scorer = WordScorer::default();
		scorer.set_pattern(&pattern);
		let aligned = scorer.score_word(&aligned, 0).map(|m| m.score);
		let buried = scorer.score_word(&buried, 0).map(|m| m.score);
		prop_assert!(aligned.is_some() && buried.is_some());
		prop_assert!(aligned > buried, "{aligned:?} <= {buried:?}");
	}

	/// Ranking keeps exactly the candidates that contain the pattern.
	#[test]
	fn prop_rank_excludes_non_matches(words in prop::collection::vec("[a-dA-D_]{0,8}", 0..24), pattern in "[a-d]{1,3}") {
		let candidates: Vec<_> = words.iter().enumerate().map(|(i, word)| Candidate::new(word, i as u32)).collect();
		let pattern_chars: Vec<char> = pattern.chars().collect();

		let mut ranked: Vec<u32> = rank_candidates(&pattern, &candidates).iter().map(|item| item.index).collect();
		ranked.sort_unstable();
		let expected: Vec<u32> = words
			.iter()
			.enumerate()
			.filter(|(_, word)| is_fuzzy_subsequence(&pattern_chars, &word.chars().collect::<Vec<_>>()))
			.map(|(i, _)| i as u32)
			.collect();
		prop_assert_eq!(ranked, expected);
	}
}
