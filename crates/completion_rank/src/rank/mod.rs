//! Ranking driver.
//!
//! Runs the word scorer over a candidate list, drops candidates that do not match or are
//! hidden by category filters, and sorts the rest best-first. An empty pattern skips
//! matching entirely and returns the unfiltered list in its initial order.

mod order;
mod parallel;

use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::RankConfig;
use crate::error::RankError;
use crate::filter::{ActiveFilters, FilterMask};
use crate::word_scorer::WordScorer;
use crate::{Highlights, Span};

/// One completion candidate as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
	/// Text the pattern is matched against.
	pub text: &'a str,
	/// Stable index in the host's list.
	pub index: u32,
	/// Text used for the initial ordering; falls back to `text`.
	pub sort_text: Option<&'a str>,
	/// Host ranking hint, higher is better. Breaks score ties.
	pub priority: i32,
	/// Offset of `text` within the displayed label, added to highlight spans.
	pub display_offset: u32,
	/// Categories the candidate belongs to.
	pub filters: FilterMask,
}

impl<'a> Candidate<'a> {
	pub fn new(text: &'a str, index: u32) -> Self {
		Self {
			text,
			index,
			sort_text: None,
			priority: 0,
			display_offset: 0,
			filters: FilterMask::EMPTY,
		}
	}

	pub fn with_sort_text(mut self, sort_text: &'a str) -> Self {
		self.sort_text = Some(sort_text);
		self
	}

	pub fn with_priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	pub fn with_display_offset(mut self, display_offset: u32) -> Self {
		self.display_offset = display_offset;
		self
	}

	pub fn with_filters(mut self, filters: FilterMask) -> Self {
		self.filters = filters;
		self
	}

	fn sort_key(&self) -> &'a str {
		self.sort_text.unwrap_or(self.text)
	}
}

/// Per-pass inputs besides the candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankRequest<'a> {
	/// What the user typed. Empty means no text filter.
	pub pattern: &'a str,
	/// Texts the host suggests; earlier entries win score ties.
	pub defaults: &'a [&'a str],
	pub filters: ActiveFilters,
	/// The host shows a suggestion item, so typed text must not hard-select.
	pub suggestion_mode: bool,
}

impl<'a> RankRequest<'a> {
	pub fn new(pattern: &'a str) -> Self {
		Self {
			pattern,
			..Self::default()
		}
	}

	pub fn with_defaults(mut self, defaults: &'a [&'a str]) -> Self {
		self.defaults = defaults;
		self
	}

	pub fn with_filters(mut self, filters: ActiveFilters) -> Self {
		self.filters = filters;
		self
	}

	pub fn with_suggestion_mode(mut self, suggestion_mode: bool) -> Self {
		self.suggestion_mode = suggestion_mode;
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
	/// The candidate's original index.
	pub index: u32,
	/// Match score; 0 when no pattern was typed.
	pub score: i64,
	pub highlights: Highlights,
	pub priority: i32,
	/// Position of the candidate's text in the request's defaults.
	pub default_index: Option<u32>,
	/// Score breakdown, when enabled in the config.
	pub debug_suffix: Option<String>,
}

/// How the host should select the first item of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionHint {
	/// The list is empty; keep whatever was selected.
	NoChange,
	/// Select the first item; committing inserts it.
	Selected,
	/// Highlight the first item without committing it on typing.
	SoftSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList {
	pub items: Vec<RankedCandidate>,
	pub selection: SelectionHint,
	/// Filters carried by candidates that matched the pattern.
	pub available_filters: FilterMask,
}

/// Ranks candidate lists, reusing its scratch buffers between passes.
#[derive(Debug, Default)]
pub struct Ranker {
	config: RankConfig,
	scorer: WordScorer,
}

impl Ranker {
	pub fn new(config: RankConfig) -> Result<Self, RankError> {
		config.validate()?;
		Ok(Self {
			scorer: WordScorer::new(config.scoring.clone()),
			config,
		})
	}

	pub fn config(&self) -> &RankConfig {
		&self.config
	}

	/// Ranks `candidates` for `request`.
	///
	/// The token is polled between candidates; once it fires the pass stops and returns
	/// [`RankError::Cancelled`].
	pub fn rank(&mut self, request: &RankRequest<'_>, candidates: &[Candidate<'_>], cancel: &CancellationToken) -> Result<RankedList, RankError> {
		let started = Instant::now();
		let mut threads = 1;

		let (items, available_filters) = if request.pattern.is_empty() {
			self.rank_unfiltered(request, candidates, cancel)?
		} else if candidates.len() >= self.config.parallel_threshold && self.config.max_threads > 1 {
			threads = parallel::thread_count(candidates.len(), &self.config);
			parallel::rank_parallel(request, candidates, &self.config, cancel, threads)?
		} else {
			self.scorer.set_pattern(request.pattern);
			let (mut items, available) = collect_matches(&mut self.scorer, request, candidates, &self.config, cancel)?;
			items.sort_unstable_by(order::by_rank);
			(items, available)
		};

		let selection = selection_hint(&items, request, &self.config);
		debug!(
			pattern_len = request.pattern.chars().count(),
			candidates = candidates.len(),
			matched = items.len(),
			threads,
			elapsed_us = started.elapsed().as_micros() as u64,
			"ranked completion candidates"
		);

		Ok(RankedList {
			items,
			selection,
			available_filters,
		})
	}

	/// Candidate indices in the configured no-text order.
	pub fn initial_order(&self, candidates: &[Candidate<'_>]) -> Vec<u32> {
		let mut sorted: Vec<&Candidate<'_>> = candidates.iter().collect();
		sorted.sort_by(|a, b| order::by_empty_pattern(self.config.empty_pattern_order, a, b));
		sorted.into_iter().map(|candidate| candidate.index).collect()
	}

	fn rank_unfiltered(&self, request: &RankRequest<'_>, candidates: &[Candidate<'_>], cancel: &CancellationToken) -> Result<(Vec<RankedCandidate>, FilterMask), RankError> {
		let mut available = FilterMask::EMPTY;
		let mut kept = Vec::with_capacity(candidates.len());
		for candidate in candidates {
			check_cancelled(cancel)?;
			available |= request.filters.announce(candidate.filters);
			if request.filters.passes(candidate.filters) {
				kept.push(candidate);
			}
		}

		kept.sort_by(|a, b| order::by_empty_pattern(self.config.empty_pattern_order, a, b));
		let items = kept
			.into_iter()
			.map(|candidate| ranked(candidate, 0, Highlights::new(), request, &self.config))
			.collect();
		Ok((items, available))
	}
}

/// Ranks `candidates` with the default configuration, best-first.
///
/// An empty pattern returns every candidate in initial order.
pub fn rank_candidates(pattern: &str, candidates: &[Candidate<'_>]) -> Vec<RankedCandidate> {
	Ranker::default()
		.rank(&RankRequest::new(pattern), candidates, &CancellationToken::new())
		.map(|list| list.items)
		.unwrap_or_default()
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), RankError> {
	if cancel.is_cancelled() {
		debug!("ranking pass cancelled");
		return Err(RankError::Cancelled);
	}
	Ok(())
}

/// Matches and filters `candidates` with a scorer that already holds the pattern.
/// The result is unsorted.
fn collect_matches(
	scorer: &mut WordScorer,
	request: &RankRequest<'_>,
	candidates: &[Candidate<'_>],
	config: &RankConfig,
	cancel: &CancellationToken,
) -> Result<(Vec<RankedCandidate>, FilterMask), RankError> {
	let mut available = FilterMask::EMPTY;
	let mut items = Vec::new();
	for candidate in candidates {
		check_cancelled(cancel)?;

		let Some(matched) = scorer.score_word(candidate.text, candidate.display_offset) else {
			continue;
		};
		if config.min_score.is_some_and(|min| matched.score < min) {
			continue;
		}

		available |= request.filters.announce(candidate.filters);
		if !request.filters.passes(candidate.filters) {
			continue;
		}

		items.push(ranked(candidate, matched.score, matched.highlights, request, config));
	}
	Ok((items, available))
}

fn ranked(candidate: &Candidate<'_>, score: i64, highlights: Highlights, request: &RankRequest<'_>, config: &RankConfig) -> RankedCandidate {
	let default_index = request.defaults.iter().position(|text| *text == candidate.text).map(|i| i as u32);
	let debug_suffix = config.debug_suffix.then(|| {
		let dash = || "-".to_string();
		format!(
			" (score: {}, priority: {}, default: {}, index: {})",
			if request.pattern.is_empty() { dash() } else { score.to_string() },
			if candidate.priority == 0 { dash() } else { candidate.priority.to_string() },
			default_index.map_or_else(dash, |i| i.to_string()),
			candidate.index,
		)
	});

	RankedCandidate {
		index: candidate.index,
		score,
		highlights,
		priority: candidate.priority,
		default_index,
		debug_suffix,
	}
}

fn selection_hint(items: &[RankedCandidate], request: &RankRequest<'_>, config: &RankConfig) -> SelectionHint {
	let Some(best) = items.first() else {
		return SelectionHint::NoChange;
	};

	if !request.pattern.is_empty() && !request.suggestion_mode {
		return SelectionHint::Selected;
	}
	if best.priority >= config.preselect_priority || !config.soft_selection {
		return SelectionHint::Selected;
	}
	SelectionHint::SoftSelected
}

impl RankedCandidate {
	/// Highlights as `(start, end)` character ranges.
	pub fn highlight_ranges(&self) -> impl Iterator<Item = std::ops::Range<u32>> + '_ {
		self.highlights.iter().map(|span: &Span| span.start..span.end())
	}
}
