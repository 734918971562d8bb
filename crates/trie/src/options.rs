use serde::{Deserialize, Serialize};

use crate::error::{Result, TrieError};

/// Smallest supported block shift (4-entry blocks).
pub const MIN_SHIFT: u32 = 2;

/// Largest supported block shift (65536-entry blocks).
///
/// Every supported block size divides [`CODE_POINT_COUNT`](crate::CODE_POINT_COUNT).
pub const MAX_SHIFT: u32 = 16;

/// Default block shift (32-entry blocks).
pub const DEFAULT_SHIFT: u32 = 5;

/// Layout parameters applied when a builder is frozen.
///
/// Deserializes from any serde format; a missing `shift` falls back to
/// [`DEFAULT_SHIFT`] and out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrieOptions")]
pub struct TrieOptions {
	shift: u32,
}

impl Default for TrieOptions {
	fn default() -> Self {
		Self {
			shift: DEFAULT_SHIFT,
		}
	}
}

impl TrieOptions {
	/// Creates options with the given block shift.
	pub fn with_shift(shift: u32) -> Result<Self> {
		if !(MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
			return Err(TrieError::InvalidShift(shift));
		}
		Ok(Self { shift })
	}

	/// Returns the block shift.
	pub const fn shift(&self) -> u32 {
		self.shift
	}

	/// Returns the number of code points per block.
	pub const fn block_size(&self) -> u32 {
		1 << self.shift
	}
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTrieOptions {
	shift: u32,
}

impl Default for RawTrieOptions {
	fn default() -> Self {
		Self {
			shift: DEFAULT_SHIFT,
		}
	}
}

impl TryFrom<RawTrieOptions> for TrieOptions {
	type Error = TrieError;

	fn try_from(raw: RawTrieOptions) -> Result<Self> {
		Self::with_shift(raw.shift)
	}
}
