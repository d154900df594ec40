// Default scoring weights. Only their relative order matters; see `Scoring`.

/// Score per matched character.
pub const SPAN_CHAR_SCORE: i64 = 32;
/// Multiplier applied to spans that begin on a subword start.
pub const SUBWORD_SPAN_MULTIPLIER: i64 = 4;

/// Unmatched word characters before the last matched span.
pub const PASSED_CHAR_PENALTY: i64 = 4;
/// Unmatched word characters after the last matched span.
pub const TRAILING_CHAR_PENALTY: i64 = 1;
/// Subwords that received no span start.
pub const UNMATCHED_SUBWORD_PENALTY: i64 = 64;
/// Charged once per span.
pub const SPAN_PENALTY: i64 = 16;

/// Pattern has an uppercase letter where the word has its lowercase form.
pub const UPPER_AS_LOWER_PENALTY: i64 = 32;
/// Pattern has a lowercase letter where the word has its uppercase form.
pub const LOWER_AS_UPPER_PENALTY: i64 = 16;

pub const PERFECT_MATCH_MULTIPLIER: i64 = 2;

/// Host priority at which the best item is selected outright.
pub const PRESELECT_PRIORITY: i32 = 2;

pub const PARALLEL_THRESHOLD: usize = 4096;
pub const MAX_THREADS: usize = 4;
