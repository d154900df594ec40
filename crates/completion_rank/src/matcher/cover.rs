use super::MatchedSpan;
use super::prospect::{CharRange, admissible};
use crate::chars::fuzzy_eq;
use crate::subword::SubwordStarts;

/// Walks every admissible diagonal and collects runs of matching characters.
///
/// Candidates come out ordered by diagonal, then by pattern position, which is the order
/// [`reconcile`] relies on.
pub(super) fn discover(pattern: &[char], word: &[char], subwords: &SubwordStarts, ranges: &[CharRange], candidates: &mut Vec<MatchedSpan>) {
	candidates.clear();

	let mut emit = |end: usize, end_in_pattern: usize, len: usize| {
		let start = end - len;
		candidates.push(MatchedSpan::new(start, end_in_pattern - len, len, subwords.is_start(start)));
	};

	for offset in 0..=word.len() - pattern.len() {
		let (first, end) = admissible(offset, ranges);
		let mut run = 0;
		for j in first..end {
			let i = offset + j;
			if fuzzy_eq(word[i], pattern[j]) {
				run += 1;
			} else if run > 0 {
				emit(i, j, run);
				run = 0;
			}

			if run > 0 && (j + 1 == end || subwords.is_start(i + 1)) {
				emit(i + 1, j + 1, run);
				run = 0;
			}
		}
	}
}

/// Folds candidates into a cover of the pattern prefix. Returns how much of the pattern
/// is covered.
pub(super) fn reconcile(candidates: &[MatchedSpan], pattern_len: usize, cover: &mut Vec<MatchedSpan>, span_of: &mut Vec<u16>) -> usize {
	cover.clear();
	span_of.clear();
	span_of.resize(pattern_len, 0);

	let mut covered = 0;
	for &candidate in candidates {
		covered = consider(candidate, covered, cover, span_of);
	}
	covered
}

fn consider(candidate: MatchedSpan, covered: usize, cover: &mut Vec<MatchedSpan>, span_of: &mut [u16]) -> usize {
	let start = candidate.start_in_pattern();
	if start > covered {
		return covered;
	}

	if start == covered {
		commit(candidate, cover, span_of);
		return candidate.end_in_pattern();
	}

	let existing_idx = span_of[start] as usize;
	let existing = cover[existing_idx];

	if supersedes(candidate, existing) {
		cover.truncate(existing_idx);
		let overlap = existing.end_in_pattern() - start;
		if overlap < existing.len() {
			commit(existing.trim_back(overlap), cover, span_of);
		}
		commit(candidate, cover, span_of);
		candidate.end_in_pattern()
	} else if candidate.end_in_pattern() > covered {
		let trimmed = candidate.trim_front(covered - start);
		commit(trimmed, cover, span_of);
		trimmed.end_in_pattern()
	} else {
		covered
	}
}

/// Whether `candidate` should replace the committed span holding its first pattern
/// character.
///
/// On the same pattern start a subword-aligned span wins, then the longer one; ties keep
/// the committed span, which sits on an earlier diagonal and is therefore the more
/// compact match. A candidate starting later in the pattern only wins when it is
/// subword-aligned and reaches further.
fn supersedes(candidate: MatchedSpan, existing: MatchedSpan) -> bool {
	if candidate.start_in_pattern() == existing.start_in_pattern() {
		return match (candidate.is_subword_start(), existing.is_subword_start()) {
			(true, false) => true,
			(false, true) => false,
			_ => candidate.len() > existing.len(),
		};
	}

	candidate.is_subword_start() && candidate.end_in_pattern() > existing.end_in_pattern()
}

fn commit(span: MatchedSpan, cover: &mut Vec<MatchedSpan>, span_of: &mut [u16]) {
	let idx = cover.len() as u16;
	span_of[span.start_in_pattern()..span.end_in_pattern()].fill(idx);
	cover.push(span);
}

/// Cover built from the earliest match of every pattern character. Adjacent positions
/// merge into one span unless the second one starts a subword.
pub(super) fn greedy_cover(ranges: &[CharRange], subwords: &SubwordStarts, cover: &mut Vec<MatchedSpan>) {
	cover.clear();
	for (j, range) in ranges.iter().enumerate() {
		let i = range.min as usize;
		let is_start = subwords.is_start(i);
		match cover.last_mut() {
			Some(last) if last.end() == i && !is_start => *last = MatchedSpan::new(last.start(), last.start_in_pattern(), last.len() + 1, last.is_subword_start()),
			_ => cover.push(MatchedSpan::new(i, j, 1, is_start)),
		}
	}
}

/// Spans are ordered, disjoint and contiguous in the pattern, cover it exactly, and
/// advance through the word.
pub(super) fn is_valid_cover(cover: &[MatchedSpan], pattern_len: usize) -> bool {
	let mut next_in_pattern = 0;
	let mut next_in_word = 0;
	for span in cover {
		if span.is_empty() || span.start_in_pattern() != next_in_pattern || span.start() < next_in_word {
			return false;
		}
		next_in_pattern = span.end_in_pattern();
		next_in_word = span.end();
	}
	next_in_pattern == pattern_len
}
