//! Compact code point tries.
//!
//! A [`TrieBuilder`] holds one `u32` per Unicode code point and accepts
//! overwrite-aware range assignments. [`TrieBuilder::freeze`] compacts it into
//! a [`FrozenTrie`]: fixed-size blocks are deduplicated, the uniform top of the
//! code point space collapses into a single `high_value`, and every lookup is
//! two array reads. Frozen tries persist through a versioned big-endian format
//! (see [`codec`]).
//!
//! ```
//! use runemap_trie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new(0, 0xbad);
//! builder.set_range(0x0041, 0x005a, 1, true)?;
//! builder.set_range(0x0000, 0x007f, 2, false)?;
//!
//! let trie = builder.freeze();
//! assert_eq!(trie.get('A'), 1);
//! assert_eq!(trie.get('!'), 2);
//! assert_eq!(trie.get(0x00e9), 0);
//! assert_eq!(trie.get(-1), 0xbad);
//!
//! let restored = runemap_trie::FrozenTrie::from_bytes(&trie.to_bytes())?;
//! assert_eq!(restored.get('A'), 1);
//! # Ok::<(), runemap_trie::TrieError>(())
//! ```

/// Mutable per-code-point storage with range assignment.
pub mod builder;
/// The Unicode code point domain.
pub mod code_point;
/// Binary persistence of frozen tries.
pub mod codec;
/// Block deduplication and high-range detection.
mod compact;
/// Error types for trie construction and decoding.
pub mod error;
/// Immutable two-level lookup tables.
pub mod frozen;
/// Trie layout options.
pub mod options;
/// Enumeration of runs of equal values.
pub mod ranges;
mod serialize;

pub use builder::TrieBuilder;
pub use code_point::{AsCodePoint, CODE_POINT_COUNT, MAX_CODE_POINT, to_domain};
pub use error::{Result, TrieError};
pub use frozen::FrozenTrie;
pub use options::{DEFAULT_SHIFT, MAX_SHIFT, MIN_SHIFT, TrieOptions};
pub use ranges::{CodePointMap, CodePointRange, Ranges};
