//! Big-endian primitives over byte streams.
//!
//! Font tables and persisted lookup structures store every multi-byte integer
//! most-significant byte first. [`BigEndianReader`] and [`BigEndianWriter`]
//! wrap any [`std::io::Read`] / [`std::io::Write`] and track how many bytes
//! have passed through them, so decoding errors can report where they happened.

/// Error types for stream decoding.
pub mod error;
/// Reading big-endian values.
pub mod reader;
/// Writing big-endian values.
pub mod writer;

pub use error::{ReadError, Result};
pub use reader::BigEndianReader;
pub use writer::BigEndianWriter;
