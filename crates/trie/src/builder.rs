use std::fmt;

use crate::code_point::{AsCodePoint, CODE_POINT_COUNT, to_domain};
use crate::compact;
use crate::error::{Result, TrieError};
use crate::frozen::FrozenTrie;
use crate::options::TrieOptions;
use crate::ranges::{CodePointMap, CodePointRange};

/// Mutable code point map used to assemble a [`FrozenTrie`].
///
/// Every code point starts at `initial_value`. Assignments made with
/// `overwrite = false` only claim code points still holding `initial_value`,
/// which lets broad defaults be layered underneath more specific ranges that
/// were assigned first.
#[derive(Clone)]
pub struct TrieBuilder {
	raw: Box<[u32]>,
	initial_value: u32,
	error_value: u32,
	options: TrieOptions,
}

impl TrieBuilder {
	/// Creates a builder with every code point set to `initial_value`.
	pub fn new(initial_value: u32, error_value: u32) -> Self {
		Self::with_options(initial_value, error_value, TrieOptions::default())
	}

	/// Creates a builder that freezes with the given layout options.
	pub fn with_options(initial_value: u32, error_value: u32, options: TrieOptions) -> Self {
		Self {
			raw: vec![initial_value; CODE_POINT_COUNT as usize].into_boxed_slice(),
			initial_value,
			error_value,
			options,
		}
	}

	pub const fn initial_value(&self) -> u32 {
		self.initial_value
	}

	pub const fn error_value(&self) -> u32 {
		self.error_value
	}

	pub const fn options(&self) -> TrieOptions {
		self.options
	}

	/// Sets a single code point, replacing any earlier value.
	pub fn set(&mut self, cp: impl AsCodePoint, value: u32) -> Result<()> {
		self.set_range(cp, cp, value, true)
	}

	/// Assigns `value` to every code point in `start..=end`.
	///
	/// With `overwrite` unset, code points that no longer hold the initial
	/// value keep what they have.
	///
	/// # Errors
	///
	/// [`TrieError::InvalidRange`] if either bound is outside the domain or
	/// `start > end`. The builder is left untouched.
	pub fn set_range(
		&mut self,
		start: impl AsCodePoint,
		end: impl AsCodePoint,
		value: u32,
		overwrite: bool,
	) -> Result<()> {
		let invalid = || TrieError::InvalidRange {
			start: start.as_code_point(),
			end: end.as_code_point(),
		};
		let (Some(first), Some(last)) = (to_domain(start), to_domain(end)) else {
			return Err(invalid());
		};
		if first > last {
			return Err(invalid());
		}

		let slots = &mut self.raw[first as usize..=last as usize];
		if overwrite {
			slots.fill(value);
		} else {
			let initial = self.initial_value;
			slots
				.iter_mut()
				.filter(|slot| **slot == initial)
				.for_each(|slot| *slot = value);
		}
		Ok(())
	}

	/// Returns the value at `cp`, or the error value outside the domain.
	#[inline]
	pub fn get(&self, cp: impl AsCodePoint) -> u32 {
		match to_domain(cp) {
			Some(cp) => self.raw[cp as usize],
			None => self.error_value,
		}
	}

	/// Compacts the current contents into an immutable trie.
	///
	/// The builder is not consumed; later assignments do not affect tries
	/// that were already frozen.
	pub fn freeze(&self) -> FrozenTrie {
		compact::compact(&self.raw, self.options.shift(), self.error_value)
	}
}

impl CodePointMap for TrieBuilder {
	fn get32(&self, cp: u32) -> u32 {
		self.get(cp)
	}

	fn get_range(&self, start: u32) -> Option<CodePointRange> {
		let tail = self.raw.get(start as usize..)?;
		let value = *tail.first()?;
		let run = tail.iter().position(|&v| v != value).unwrap_or(tail.len());
		Some(CodePointRange {
			range: start..=start + (run as u32 - 1),
			value,
		})
	}
}

impl fmt::Debug for TrieBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TrieBuilder")
			.field("initial_value", &self.initial_value)
			.field("error_value", &self.error_value)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}
