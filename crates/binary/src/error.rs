//! Error types for big-endian stream decoding.

use thiserror::Error;

/// Errors that can occur while reading from a byte stream.
#[derive(Debug, Error)]
pub enum ReadError {
	/// The stream ended before a value could be read in full.
	#[error("unexpected end of input at offset {offset}: needed {needed} more bytes")]
	UnexpectedEof {
		/// Stream position at which the read started.
		offset: u64,
		/// Bytes the read required.
		needed: usize,
	},

	/// The underlying stream failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for stream decoding.
pub type Result<T> = std::result::Result<T, ReadError>;
