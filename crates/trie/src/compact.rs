//! Freezing: builder storage to a deduplicated two-level table.
//!
//! The domain is cut into blocks of `1 << shift` code points. The longest run
//! of whole blocks at the top of the domain that all hold the value of
//! `MAX_CODE_POINT` is dropped and recorded as `high_start`/`high_value`. The
//! remaining blocks are deduplicated by content; `index[block]` holds the
//! offset of the block's first occurrence in `data`.

use rustc_hash::FxHashMap;

use crate::code_point::{CODE_POINT_COUNT, MAX_CODE_POINT};
use crate::frozen::FrozenTrie;

/// Compacts one value per code point into a [`FrozenTrie`].
///
/// `raw` must hold exactly [`CODE_POINT_COUNT`] values and `shift` must be a
/// validated block shift.
pub(crate) fn compact(raw: &[u32], shift: u32, error_value: u32) -> FrozenTrie {
	debug_assert_eq!(raw.len(), CODE_POINT_COUNT as usize);
	let block_size = 1usize << shift;

	let high_value = raw[MAX_CODE_POINT as usize];
	let high_start = find_high_start(raw, block_size, high_value);

	let block_count = high_start / block_size;
	let mut index = Vec::with_capacity(block_count);
	let mut data = Vec::new();
	let mut seen: FxHashMap<&[u32], u32> = FxHashMap::default();

	for block in raw[..high_start].chunks_exact(block_size) {
		let offset = *seen.entry(block).or_insert_with(|| {
			let offset = data.len() as u32;
			data.extend_from_slice(block);
			offset
		});
		index.push(offset);
	}

	tracing::debug!(
		shift,
		high_start,
		high_value,
		blocks = block_count,
		distinct_blocks = seen.len(),
		data_len = data.len(),
		"Froze code point trie"
	);

	FrozenTrie::from_validated_parts(
		shift,
		index.into_boxed_slice(),
		data.into_boxed_slice(),
		high_start as u32,
		high_value,
		error_value,
	)
}

/// Returns the lowest block boundary from which every value up to the end of
/// the domain equals `high_value`.
fn find_high_start(raw: &[u32], block_size: usize, high_value: u32) -> usize {
	let uniform_blocks = raw
		.rchunks_exact(block_size)
		.take_while(|block| block.iter().all(|&v| v == high_value))
		.count();
	raw.len() - uniform_blocks * block_size
}
