use bitflags::bitflags;

bitflags! {
	/// Character classes the subword segmenter cares about.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub(crate) struct CharKind: u8 {
		const LETTER = 1 << 0;
		const UPPER = 1 << 1;
	}
}

impl CharKind {
	#[inline]
	pub(crate) fn of(c: char) -> Self {
		let mut kind = Self::empty();
		kind.set(Self::LETTER, c.is_alphabetic());
		kind.set(Self::UPPER, c.is_uppercase());
		kind
	}

	#[inline]
	pub(crate) fn is_letter(self) -> bool {
		self.contains(Self::LETTER)
	}

	#[inline]
	pub(crate) fn is_upper(self) -> bool {
		self.contains(Self::UPPER)
	}
}

/// Fuzzy-case equality: identical, or the same ASCII letter in a different case.
#[inline(always)]
pub(crate) fn fuzzy_eq(word_char: char, pattern_char: char) -> bool {
	word_char == pattern_char || (word_char.is_ascii_alphabetic() && word_char.eq_ignore_ascii_case(&pattern_char))
}

/// How a fuzzy-equal pair of characters differs in case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaseMatch {
	Exact,
	/// The pattern has `A` where the word has `a`.
	UpperAsLower,
	/// The pattern has `a` where the word has `A`.
	LowerAsUpper,
}

#[inline]
pub(crate) fn case_match(word_char: char, pattern_char: char) -> CaseMatch {
	debug_assert!(fuzzy_eq(word_char, pattern_char));
	match word_char.cmp(&pattern_char) {
		std::cmp::Ordering::Equal => CaseMatch::Exact,
		std::cmp::Ordering::Greater => CaseMatch::UpperAsLower,
		std::cmp::Ordering::Less => CaseMatch::LowerAsUpper,
	}
}
