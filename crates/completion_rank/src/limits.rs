//! Fixed input limits.
//!
//! Patterns and words longer than these limits are truncated, never rejected: only the
//! first [`MAX_PATTERN_LEN`] pattern characters and the first [`MAX_WORD_LEN`] word
//! characters take part in matching. Highlight spans therefore never extend past
//! [`MAX_WORD_LEN`].

/// Maximum number of pattern characters considered.
pub const MAX_PATTERN_LEN: usize = 256;

/// Maximum number of word characters considered.
pub const MAX_WORD_LEN: usize = 1024;

/// Decodes at most `limit` characters of `text` into `buf`, replacing its contents.
///
/// Returns `true` if `text` had to be truncated.
pub(crate) fn load_chars(text: &str, limit: usize, buf: &mut Vec<char>) -> bool {
	buf.clear();
	let mut chars = text.chars();
	buf.extend(chars.by_ref().take(limit));
	let truncated = chars.next().is_some();
	if truncated {
		tracing::trace!(limit, "input truncated");
	}
	truncated
}
