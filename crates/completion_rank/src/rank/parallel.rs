use tokio_util::sync::CancellationToken;

use super::{Candidate, RankRequest, RankedCandidate, collect_matches, order};
use crate::config::RankConfig;
use crate::error::RankError;
use crate::filter::FilterMask;
use crate::word_scorer::WordScorer;

pub(super) fn thread_count(candidates: usize, config: &RankConfig) -> usize {
	let min_per_thread = (config.parallel_threshold / 2).max(1);
	(candidates / min_per_thread).clamp(1, config.max_threads.max(1))
}

/// Splits `candidates` into one chunk per thread, each scored with its own scratch,
/// then merges and sorts.
pub(super) fn rank_parallel(
	request: &RankRequest<'_>,
	candidates: &[Candidate<'_>],
	config: &RankConfig,
	cancel: &CancellationToken,
	threads: usize,
) -> Result<(Vec<RankedCandidate>, FilterMask), RankError> {
	let per_thread = candidates.len().div_ceil(threads.max(1)).max(1);

	let (mut items, available) = std::thread::scope(|s| {
		let tasks: Vec<_> = candidates
			.chunks(per_thread)
			.map(|chunk| {
				s.spawn(move || {
					let mut scorer = WordScorer::new(config.scoring.clone());
					scorer.set_pattern(request.pattern);
					collect_matches(&mut scorer, request, chunk, config, cancel)
				})
			})
			.collect();

		let mut items = Vec::new();
		let mut available = FilterMask::EMPTY;
		let mut result = Ok(());
		for task in tasks {
			match task.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)) {
				Ok((chunk_items, chunk_available)) => {
					items.extend(chunk_items);
					available |= chunk_available;
				}
				Err(err) => result = Err(err),
			}
		}
		result.map(|()| (items, available))
	})?;

	#[cfg(feature = "parallel_sort")]
	{
		use rayon::prelude::*;
		items.par_sort_unstable_by(order::by_rank);
	}
	#[cfg(not(feature = "parallel_sort"))]
	items.sort_unstable_by(order::by_rank);

	Ok((items, available))
}
