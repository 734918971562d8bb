use std::ops::RangeInclusive;

use crate::code_point::MAX_CODE_POINT;

/// A maximal run of consecutive code points sharing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointRange {
	/// Code points covered, both ends inclusive.
	pub range: RangeInclusive<u32>,
	/// Value shared by every code point in `range`.
	pub value: u32,
}

/// Read access shared by [`TrieBuilder`](crate::TrieBuilder) and
/// [`FrozenTrie`](crate::FrozenTrie).
pub trait CodePointMap {
	/// Returns the value at `cp`, or the error value above `MAX_CODE_POINT`.
	fn get32(&self, cp: u32) -> u32;

	/// Returns the longest run starting at `start` whose code points all hold
	/// the value at `start`.
	///
	/// Returns `None` if `start` is above `MAX_CODE_POINT`.
	fn get_range(&self, start: u32) -> Option<CodePointRange>;

	/// Iterates the domain as consecutive maximal runs.
	///
	/// The runs cover `0..=MAX_CODE_POINT` exactly, in order, and adjacent runs
	/// never share a value.
	fn iter_ranges(&self) -> Ranges<'_, Self>
	where
		Self: Sized,
	{
		Ranges {
			map: self,
			next_start: Some(0),
		}
	}

	/// Iterates the runs holding `value`.
	fn iter_ranges_for_value(&self, value: u32) -> impl Iterator<Item = RangeInclusive<u32>>
	where
		Self: Sized,
	{
		self.iter_ranges()
			.filter(move |run| run.value == value)
			.map(|run| run.range)
	}
}

/// Iterator returned by [`CodePointMap::iter_ranges`].
#[derive(Debug, Clone)]
pub struct Ranges<'a, M> {
	map: &'a M,
	next_start: Option<u32>,
}

impl<M: CodePointMap> Iterator for Ranges<'_, M> {
	type Item = CodePointRange;

	fn next(&mut self) -> Option<CodePointRange> {
		let run = self.map.get_range(self.next_start?)?;
		let end = *run.range.end();
		self.next_start = (end < MAX_CODE_POINT).then(|| end + 1);
		Some(run)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::TrieBuilder;

	fn sample() -> TrieBuilder {
		let mut builder = TrieBuilder::new(0, 0xbad);
		builder.set_range(0x41, 0x5a, 1, true).unwrap();
		builder.set_range(0x61, 0x7a, 1, true).unwrap();
		builder.set_range(0x3000, 0x30ff, 2, true).unwrap();
		builder
	}

	#[test]
	fn builder_and_frozen_enumerate_identically() {
		let builder = sample();
		let frozen = builder.freeze();
		let expected = vec![
			CodePointRange { range: 0..=0x40, value: 0 },
			CodePointRange { range: 0x41..=0x5a, value: 1 },
			CodePointRange { range: 0x5b..=0x60, value: 0 },
			CodePointRange { range: 0x61..=0x7a, value: 1 },
			CodePointRange { range: 0x7b..=0x2fff, value: 0 },
			CodePointRange { range: 0x3000..=0x30ff, value: 2 },
			CodePointRange { range: 0x3100..=MAX_CODE_POINT, value: 0 },
		];
		assert_eq!(builder.iter_ranges().collect::<Vec<_>>(), expected);
		assert_eq!(frozen.iter_ranges().collect::<Vec<_>>(), expected);
	}

	#[test]
	fn ranges_for_value_filters_runs() {
		let frozen = sample().freeze();
		let letters: Vec<_> = frozen.iter_ranges_for_value(1).collect();
		assert_eq!(letters, vec![0x41..=0x5a, 0x61..=0x7a]);
	}

	#[test]
	fn get_range_starts_mid_run() {
		let frozen = sample().freeze();
		assert_eq!(
			frozen.get_range(0x50),
			Some(CodePointRange { range: 0x50..=0x5a, value: 1 })
		);
		assert_eq!(frozen.get_range(MAX_CODE_POINT + 1), None);
	}

	#[test]
	fn uniform_map_is_one_run() {
		let frozen = TrieBuilder::new(7, 0).freeze();
		let runs: Vec<_> = frozen.iter_ranges().collect();
		assert_eq!(runs, vec![CodePointRange { range: 0..=MAX_CODE_POINT, value: 7 }]);
	}

	#[test]
	fn run_touching_high_start_extends_to_the_end() {
		let mut builder = TrieBuilder::new(0, 0xbad);
		builder.set_range(0x20000, MAX_CODE_POINT, 4, true).unwrap();
		builder.set_range(0x1fff0, 0x1ffff, 4, true).unwrap();
		let frozen = builder.freeze();
		assert_eq!(frozen.high_start(), 0x20000);
		assert_eq!(
			frozen.get_range(0x1fff0),
			Some(CodePointRange { range: 0x1fff0..=MAX_CODE_POINT, value: 4 })
		);
	}
}
