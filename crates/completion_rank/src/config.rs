//! Ranking configuration.
//!
//! Everything that would otherwise be a global setting is an explicit field here and is
//! handed to the [`Ranker`](crate::Ranker) on construction.
//!
//! ```
//! use xeno_completion_rank::{EmptyPatternOrder, RankConfig};
//!
//! let config = RankConfig::from_toml(
//! 	r#"
//! 	empty_pattern_order = "index"
//! 	max_threads = 2
//!
//! 	[scoring]
//! 	unmatched_subword_penalty = 48
//! 	"#,
//! )
//! .unwrap();
//! assert_eq!(config.empty_pattern_order, EmptyPatternOrder::Index);
//! assert_eq!(config.scoring.unmatched_subword_penalty, 48);
//! assert_eq!(config.scoring.span_penalty, 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::r#const::{MAX_THREADS, PARALLEL_THRESHOLD, PRESELECT_PRIORITY};
use crate::scorer::Scoring;

/// Order of the list while no text has been typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPatternOrder {
	/// Original candidate index, ascending.
	Index,
	/// Fewest leading underscores in the sort text first, then ordinal sort text order,
	/// then original index.
	#[default]
	SortText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
	pub scoring: Scoring,
	pub empty_pattern_order: EmptyPatternOrder,
	/// Matches scoring below this are dropped.
	pub min_score: Option<i64>,
	/// When disabled, the best item is always hard-selected.
	pub soft_selection: bool,
	/// Host priority at or above which the best item is hard-selected.
	pub preselect_priority: i32,
	/// Attach a score breakdown to every ranked item.
	pub debug_suffix: bool,
	/// Candidate count from which ranking is spread across threads.
	pub parallel_threshold: usize,
	pub max_threads: usize,
}

impl Default for RankConfig {
	fn default() -> Self {
		Self {
			scoring: Scoring::default(),
			empty_pattern_order: EmptyPatternOrder::default(),
			min_score: None,
			soft_selection: true,
			preselect_priority: PRESELECT_PRIORITY,
			debug_suffix: false,
			parallel_threshold: PARALLEL_THRESHOLD,
			max_threads: MAX_THREADS,
		}
	}
}

impl RankConfig {
	/// Parses and validates a TOML document. Missing keys keep their defaults.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_threads == 0 {
			return Err(ConfigError::Invalid {
				field: "max_threads",
				reason: "must be at least 1",
			});
		}
		if self.parallel_threshold == 0 {
			return Err(ConfigError::Invalid {
				field: "parallel_threshold",
				reason: "must be at least 1",
			});
		}

		let scoring = &self.scoring;
		if scoring.span_char_score <= 0 {
			return Err(ConfigError::Invalid {
				field: "scoring.span_char_score",
				reason: "must be positive",
			});
		}
		if scoring.subword_span_multiplier < 1 {
			return Err(ConfigError::Invalid {
				field: "scoring.subword_span_multiplier",
				reason: "must be at least 1",
			});
		}
		if scoring.perfect_match_multiplier < 1 {
			return Err(ConfigError::Invalid {
				field: "scoring.perfect_match_multiplier",
				reason: "must be at least 1",
			});
		}

		let penalties = [
			("scoring.passed_char_penalty", scoring.passed_char_penalty),
			("scoring.trailing_char_penalty", scoring.trailing_char_penalty),
			("scoring.unmatched_subword_penalty", scoring.unmatched_subword_penalty),
			("scoring.span_penalty", scoring.span_penalty),
			("scoring.upper_as_lower_penalty", scoring.upper_as_lower_penalty),
			("scoring.lower_as_upper_penalty", scoring.lower_as_upper_penalty),
		];
		if let Some((field, _)) = penalties.into_iter().find(|(_, value)| *value < 0) {
			return Err(ConfigError::Invalid {
				field,
				reason: "penalties cannot be negative",
			});
		}

		Ok(())
	}
}
