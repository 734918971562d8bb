//! Error types for trie construction and decoding.

use runemap_binary::ReadError;
use thiserror::Error;

/// Errors raised while building, configuring or decoding a trie.
///
/// Lookups never fail; out-of-domain code points resolve to the trie's error
/// value instead.
#[derive(Debug, Error)]
pub enum TrieError {
	/// A range assignment named code points outside the domain, or `start > end`.
	#[error("invalid code point range: {start:#x}..={end:#x}")]
	InvalidRange {
		/// First code point of the rejected range.
		start: i64,
		/// Last code point of the rejected range.
		end: i64,
	},

	/// A block shift outside the supported range.
	#[error("invalid block shift {0} (expected {min}..={max})", min = crate::MIN_SHIFT, max = crate::MAX_SHIFT)]
	InvalidShift(u32),

	/// Serialized or assembled trie data is inconsistent.
	#[error("malformed trie: {0}")]
	Malformed(&'static str),

	/// The underlying byte stream failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<ReadError> for TrieError {
	fn from(err: ReadError) -> Self {
		match err {
			ReadError::UnexpectedEof { .. } => Self::Malformed("truncated input"),
			ReadError::Io(e) => Self::Io(e),
		}
	}
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
