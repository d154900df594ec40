use std::cmp::Ordering;

use super::{Candidate, RankedCandidate};
use crate::config::EmptyPatternOrder;

/// Best-first: score, then host priority, then position in the host's defaults, then
/// original index.
pub(crate) fn by_rank(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
	b.score
		.cmp(&a.score)
		.then_with(|| b.priority.cmp(&a.priority))
		.then_with(|| default_position(a).cmp(&default_position(b)))
		.then_with(|| a.index.cmp(&b.index))
}

fn default_position(item: &RankedCandidate) -> u32 {
	item.default_index.unwrap_or(u32::MAX)
}

/// Order used before any text is typed.
pub(crate) fn by_empty_pattern(order: EmptyPatternOrder, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
	match order {
		EmptyPatternOrder::Index => a.index.cmp(&b.index),
		EmptyPatternOrder::SortText => by_sort_text(a.sort_key(), b.sort_key()).then_with(|| a.index.cmp(&b.index)),
	}
}

/// Fewer leading underscores first, so `__private` members sink below public ones, then
/// dictionary order: case-folded text, lowercase before uppercase on ties, then ordinal.
fn by_sort_text(a: &str, b: &str) -> Ordering {
	let underscores = if !a.is_empty() && !b.is_empty() {
		leading_underscores(a).cmp(&leading_underscores(b))
	} else {
		Ordering::Equal
	};
	underscores
		.then_with(|| a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase)))
		.then_with(|| a.chars().map(lower_first).cmp(b.chars().map(lower_first)))
		.then_with(|| a.cmp(b))
}

/// Swaps ASCII case so lowercase letters order before their uppercase forms.
fn lower_first(c: char) -> char {
	if c.is_ascii_uppercase() {
		c.to_ascii_lowercase()
	} else {
		c.to_ascii_uppercase()
	}
}

fn leading_underscores(text: &str) -> usize {
	text.bytes().take_while(|&b| b == b'_').count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn underscores_sink() {
		let mut texts = vec!["__init", "_hidden", "zeta", "Alpha", "alpha"];
		texts.sort_by(|a, b| by_sort_text(a, b));
		assert_eq!(texts, vec!["alpha", "Alpha", "zeta", "_hidden", "__init"]);
	}

	#[test]
	fn mixed_case_sorts_as_in_a_dictionary() {
		let mut texts = vec!["gamma", "Zeta", "Beta", "alpha", "beta", "BETA"];
		texts.sort_by(|a, b| by_sort_text(a, b));
		assert_eq!(texts, vec!["alpha", "beta", "Beta", "BETA", "gamma", "Zeta"]);
	}

	#[test]
	fn empty_sort_text_skips_underscore_rule() {
		assert_eq!(by_sort_text("", "_a"), Ordering::Less);
		assert_eq!(by_sort_text("_a", ""), Ordering::Greater);
	}
}
