//! Error types.
//!
//! A candidate that does not match is not an error; it is simply left out of the ranked
//! list.

/// Errors from a ranking pass.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RankError {
	/// The cancellation token fired before the pass completed. Partial results are
	/// discarded.
	#[error("ranking pass cancelled")]
	Cancelled,
	/// The ranker was built from an invalid configuration.
	#[error("{0}")]
	Config(#[from] ConfigError),
}

/// Errors from loading or validating a [`RankConfig`](crate::RankConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
	#[error("failed to parse rank config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid value for `{field}`: {reason}")]
	Invalid { field: &'static str, reason: &'static str },
}
