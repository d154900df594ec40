use crate::chars::fuzzy_eq;

/// Word positions where a pattern character can match while the rest of the pattern
/// still fits on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharRange {
	pub min: u16,
	pub max: u16,
}

/// Fills `ranges` with the earliest and latest match position of every pattern
/// character. The earliest positions come from a greedy forward pass, the latest from a
/// greedy backward pass.
///
/// Returns `false` if the pattern is not a subsequence of the word.
pub(crate) fn prospect(pattern: &[char], word: &[char], ranges: &mut Vec<CharRange>) -> bool {
	ranges.clear();
	ranges.resize(pattern.len(), CharRange::default());

	let mut i = 0;
	let mut j = 0;
	while j < pattern.len() {
		if pattern.len() - j > word.len() - i {
			return false;
		}
		if fuzzy_eq(word[i], pattern[j]) {
			ranges[j].min = i as u16;
			j += 1;
		}
		i += 1;
	}

	// The forward pass succeeded, so the backward pass finds every character before `i`
	// runs out.
	let mut i = word.len();
	while j > 0 {
		i -= 1;
		if fuzzy_eq(word[i], pattern[j - 1]) {
			ranges[j - 1].max = i as u16;
			j -= 1;
		}
	}

	true
}

/// Pattern indices `first..end` whose ranges admit the diagonal `offset`, after trimming
/// inadmissible indices from both ends.
pub(crate) fn admissible(offset: usize, ranges: &[CharRange]) -> (usize, usize) {
	let mut first = 0;
	let last = ranges.len() - 1;
	while first < last && offset + first > ranges[first].max as usize {
		first += 1;
	}

	let mut end = ranges.len();
	while end > first && offset + end - 1 < ranges[end - 1].min as usize {
		end -= 1;
	}

	(first, end)
}
