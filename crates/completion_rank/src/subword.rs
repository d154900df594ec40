//! Subword segmentation.
//!
//! A subword is a maximal run of a word delimited by case or letter-class transitions:
//! `getHtmlAsync` splits into `get`, `Html`, `Async`, and `XMLParser` into `XML`,
//! `Parser`. Spans produced by the matcher never cross a subword start, and the scorer
//! rewards spans that begin on one.

use crate::chars::CharKind;

const BITS: usize = u64::BITS as usize;

/// One bit per word character, set where a subword begins.
///
/// Reading past the end of the word yields `false`, so a span ending at the last
/// character never looks like it runs into a boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubwordStarts {
	bits: Vec<u64>,
	len: usize,
	count: u32,
}

impl SubwordStarts {
	pub fn new() -> Self {
		Self::default()
	}

	/// Re-segments `word`, reusing the existing allocation. Returns the subword count.
	pub fn recompute(&mut self, word: &[char]) -> u32 {
		let n = word.len();
		self.bits.clear();
		self.bits.resize(n / BITS + 1, 0);
		self.len = n;
		self.count = 0;

		let mut prev = CharKind::empty();
		let mut cur = word.first().copied().map(CharKind::of).unwrap_or_default();
		for i in 0..n {
			let next = word.get(i + 1).copied().map(CharKind::of);
			let is_start = i == 0
				|| ((!prev.is_upper() || word[i - 1] == 'I') && cur.is_upper())
				|| prev.is_letter() != cur.is_letter()
				|| (cur.is_upper() && next.is_some_and(|next| !next.is_upper()));

			if is_start {
				self.bits[i / BITS] |= 1 << (i % BITS);
				self.count += 1;
			}

			prev = cur;
			cur = next.unwrap_or_default();
		}

		self.count
	}

	#[inline]
	pub fn is_start(&self, index: usize) -> bool {
		index < self.len && self.bits[index / BITS] & (1 << (index % BITS)) != 0
	}

	/// Number of subwords in the segmented word.
	pub fn count(&self) -> u32 {
		self.count
	}

	/// Length of the segmented word, in characters.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Positions of all subword starts, ascending.
	pub fn starts(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.len).filter(|&i| self.is_start(i))
	}
}

/// Segments `word` into subwords.
pub fn segment_subwords(word: &[char]) -> SubwordStarts {
	let mut starts = SubwordStarts::new();
	starts.recompute(word);
	starts
}
