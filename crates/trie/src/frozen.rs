use std::fmt;

use crate::code_point::{AsCodePoint, CODE_POINT_COUNT, MAX_CODE_POINT, to_domain};
use crate::error::{Result, TrieError};
use crate::options::{MAX_SHIFT, MIN_SHIFT};
use crate::ranges::{CodePointMap, CodePointRange};

/// Immutable two-level code point lookup table.
///
/// Produced by [`TrieBuilder::freeze`](crate::TrieBuilder::freeze) or decoded
/// with [`FrozenTrie::load`]. Lookups below `high_start` read
/// `data[index[cp >> shift] + (cp & (block_size - 1))]`; code points from
/// `high_start` through `MAX_CODE_POINT` share `high_value`, and anything
/// outside the domain yields `error_value`.
///
/// # Invariants
///
/// - `MIN_SHIFT <= shift <= MAX_SHIFT`.
/// - `high_start` is a multiple of the block size and at most `CODE_POINT_COUNT`.
/// - `index.len() == high_start >> shift`.
/// - Every `index[i] + block_size <= data.len()`.
#[derive(Clone, PartialEq, Eq)]
pub struct FrozenTrie {
	shift: u32,
	index: Box<[u32]>,
	data: Box<[u32]>,
	high_start: u32,
	high_value: u32,
	error_value: u32,
}

impl FrozenTrie {
	/// Assembles a trie from its raw parts, checking every structural invariant.
	///
	/// # Errors
	///
	/// [`TrieError::Malformed`] naming the first violated invariant.
	pub fn try_from_parts(
		shift: u32,
		index: impl Into<Box<[u32]>>,
		data: impl Into<Box<[u32]>>,
		high_start: u32,
		high_value: u32,
		error_value: u32,
	) -> Result<Self> {
		let index = index.into();
		let data = data.into();
		validate_layout(shift, high_start, index.len(), data.len())?;

		let block_size = 1usize << shift;
		if index
			.iter()
			.any(|&offset| offset as usize + block_size > data.len())
		{
			return Err(TrieError::Malformed("index entry points past end of data"));
		}

		Ok(Self::from_validated_parts(
			shift,
			index,
			data,
			high_start,
			high_value,
			error_value,
		))
	}

	pub(crate) fn from_validated_parts(
		shift: u32,
		index: Box<[u32]>,
		data: Box<[u32]>,
		high_start: u32,
		high_value: u32,
		error_value: u32,
	) -> Self {
		Self {
			shift,
			index,
			data,
			high_start,
			high_value,
			error_value,
		}
	}

	/// Returns the value at `cp`, or the error value outside the domain.
	#[inline]
	pub fn get(&self, cp: impl AsCodePoint) -> u32 {
		match to_domain(cp) {
			Some(cp) => self.get32(cp),
			None => self.error_value,
		}
	}

	/// Returns the value at a `u32` code point.
	///
	/// Values above `MAX_CODE_POINT` yield the error value.
	#[inline]
	pub fn get32(&self, cp: u32) -> u32 {
		if cp > MAX_CODE_POINT {
			return self.error_value;
		}
		if cp >= self.high_start {
			return self.high_value;
		}
		self.index
			.get((cp >> self.shift) as usize)
			.and_then(|&offset| self.data.get(offset as usize + (cp & self.mask()) as usize))
			.copied()
			.unwrap_or(self.error_value)
	}

	/// Returns the value for a `char`.
	#[inline]
	pub fn get_char(&self, c: char) -> u32 {
		self.get32(u32::from(c))
	}

	pub const fn shift(&self) -> u32 {
		self.shift
	}

	pub const fn block_size(&self) -> u32 {
		1 << self.shift
	}

	/// First code point of the uniform top range.
	pub const fn high_start(&self) -> u32 {
		self.high_start
	}

	/// Value shared by every code point from `high_start` upward.
	pub const fn high_value(&self) -> u32 {
		self.high_value
	}

	pub const fn error_value(&self) -> u32 {
		self.error_value
	}

	/// Block offsets into [`data`](Self::data), one per block below `high_start`.
	pub fn index(&self) -> &[u32] {
		&self.index
	}

	/// Concatenated contents of all distinct blocks.
	pub fn data(&self) -> &[u32] {
		&self.data
	}

	/// Bytes of heap memory owned by the index and data arrays.
	pub fn heap_size(&self) -> usize {
		size_of_val(&*self.index) + size_of_val(&*self.data)
	}

	#[inline]
	const fn mask(&self) -> u32 {
		(1 << self.shift) - 1
	}
}

/// Checks the header-level invariants that do not need the array contents.
pub(crate) fn validate_layout(
	shift: u32,
	high_start: u32,
	index_len: usize,
	data_len: usize,
) -> Result<()> {
	if !(MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
		return Err(TrieError::Malformed("block shift out of range"));
	}
	if high_start > CODE_POINT_COUNT {
		return Err(TrieError::Malformed("high start beyond code point range"));
	}
	if high_start & ((1 << shift) - 1) != 0 {
		return Err(TrieError::Malformed("high start not aligned to block size"));
	}
	if index_len != (high_start >> shift) as usize {
		return Err(TrieError::Malformed("index length does not match high start"));
	}
	if data_len > high_start as usize {
		return Err(TrieError::Malformed("data longer than the indexed range"));
	}
	Ok(())
}

impl CodePointMap for FrozenTrie {
	fn get32(&self, cp: u32) -> u32 {
		FrozenTrie::get32(self, cp)
	}

	fn get_range(&self, start: u32) -> Option<CodePointRange> {
		if start > MAX_CODE_POINT {
			return None;
		}
		let value = self.get32(start);
		let block_size = self.block_size();
		let mut next = start + 1;

		// Scan block by block; a block whose remainder is all `value` is skipped whole.
		while next < self.high_start {
			let block_start = next & !self.mask();
			let offset = self.index[(next >> self.shift) as usize] as usize;
			let block = &self.data[offset..offset + block_size as usize];
			let within = (next - block_start) as usize;
			if let Some(pos) = block[within..].iter().position(|&v| v != value) {
				return Some(CodePointRange {
					range: start..=next + pos as u32 - 1,
					value,
				});
			}
			next = block_start + block_size;
		}

		let end = if value == self.high_value {
			MAX_CODE_POINT
		} else {
			next - 1
		};
		Some(CodePointRange {
			range: start..=end,
			value,
		})
	}
}

impl fmt::Debug for FrozenTrie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FrozenTrie")
			.field("shift", &self.shift)
			.field("high_start", &format_args!("{:#x}", self.high_start))
			.field("high_value", &self.high_value)
			.field("error_value", &self.error_value)
			.field("index_len", &self.index.len())
			.field("data_len", &self.data.len())
			.finish()
	}
}

#[cfg(test)]
mod tests;
