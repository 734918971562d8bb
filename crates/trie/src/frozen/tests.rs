use proptest::prelude::*;
use rstest::rstest;

use super::FrozenTrie;
use crate::TrieBuilder;
use crate::code_point::{CODE_POINT_COUNT, MAX_CODE_POINT};
use crate::error::TrieError;

fn layered() -> TrieBuilder {
	let mut builder = TrieBuilder::new(10, 666);
	builder.set_range(13, 6666, 7788, false).unwrap();
	builder.set_range(6000, 7000, 9900, true).unwrap();
	builder
}

#[test]
fn compacted_lookups_match_builder() {
	let trie = layered().freeze();
	assert_eq!(trie.get(12), 10);
	assert_eq!(trie.get(13), 7788);
	assert_eq!(trie.get(5999), 7788);
	assert_eq!(trie.get(6000), 9900);
	assert_eq!(trie.get(7000), 9900);
	assert_eq!(trie.get(7001), 10);
	assert_eq!(trie.get(0x110000), 666);
}

#[test]
fn out_of_domain_yields_error_value() {
	let trie = layered().freeze();
	assert_eq!(trie.get(-1), 666);
	assert_eq!(trie.get(i64::MIN), 666);
	assert_eq!(trie.get(u32::MAX), 666);
	assert_eq!(trie.get32(CODE_POINT_COUNT), 666);
	assert_eq!(trie.get32(MAX_CODE_POINT), 10);
}

#[test]
fn char_lookup_matches_integer_lookup() {
	let trie = layered().freeze();
	assert_eq!(trie.get_char('\u{1770}'), trie.get(0x1770));
	assert_eq!(trie.get_char(char::MAX), 10);
}

#[test]
fn only_initial_value_gives_uniform_trie() {
	let mut builder = TrieBuilder::new(3, 0x0bad);
	builder.set_range(0, 0, 3, false).unwrap();
	let trie = builder.freeze();
	assert_eq!(trie.get(0), 3);
	assert_eq!(trie.get(0x10ffff), 3);
	assert_eq!(trie.high_start(), 0);
	assert_eq!(trie.heap_size(), 0);
}

#[test]
fn heap_size_counts_both_arrays() {
	let trie = layered().freeze();
	assert_eq!(trie.heap_size(), 4 * (trie.index().len() + trie.data().len()));
}

#[test]
fn debug_summarizes_instead_of_dumping_arrays() {
	let trie = layered().freeze();
	let debug = format!("{trie:?}");
	assert!(debug.starts_with("FrozenTrie {"));
	assert!(debug.contains("index_len"));
	assert!(debug.len() < 200);
}

#[test]
fn try_from_parts_accepts_compactor_output() {
	let trie = layered().freeze();
	let rebuilt = FrozenTrie::try_from_parts(
		trie.shift(),
		trie.index().to_vec(),
		trie.data().to_vec(),
		trie.high_start(),
		trie.high_value(),
		trie.error_value(),
	)
	.unwrap();
	assert_eq!(rebuilt, trie);
}

#[rstest]
#[case::shift_too_small(1, vec![], vec![], 0, "block shift out of range")]
#[case::shift_too_large(17, vec![], vec![], 0, "block shift out of range")]
#[case::high_start_past_domain(5, vec![0; 0x8801], vec![0; 32], 0x110020, "high start beyond code point range")]
#[case::unaligned_high_start(5, vec![0], vec![0; 32], 33, "high start not aligned to block size")]
#[case::short_index(5, vec![0], vec![0; 32], 64, "index length does not match high start")]
#[case::long_data(5, vec![0], vec![0; 64], 32, "data longer than the indexed range")]
#[case::offset_past_data(5, vec![0, 1], vec![0; 32], 64, "index entry points past end of data")]
fn try_from_parts_rejects(
	#[case] shift: u32,
	#[case] index: Vec<u32>,
	#[case] data: Vec<u32>,
	#[case] high_start: u32,
	#[case] reason: &str,
) {
	match FrozenTrie::try_from_parts(shift, index, data, high_start, 0, 0) {
		Err(TrieError::Malformed(got)) => assert_eq!(got, reason),
		other => panic!("expected Malformed({reason:?}), got {other:?}"),
	}
}

#[test]
fn frozen_trie_is_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<FrozenTrie>();

	let trie = layered().freeze();
	std::thread::scope(|scope| {
		for offset in 0..4u32 {
			let trie = &trie;
			scope.spawn(move || {
				for cp in (offset..8000).step_by(4) {
					let expected = match cp {
						0..=12 => 10,
						6000..=7000 => 9900,
						13..=6666 => 7788,
						_ => 10,
					};
					assert_eq!(trie.get(cp), expected);
				}
			});
		}
	});
}

#[derive(Debug, Clone)]
struct Assignment {
	start: u32,
	end: u32,
	value: u32,
	overwrite: bool,
}

fn arb_assignment() -> impl Strategy<Value = Assignment> {
	let bound = prop_oneof![0..0x800u32, 0..0x3_0000u32, 0..=MAX_CODE_POINT];
	(bound, 0..0x2000u32, 0..8u32, any::<bool>()).prop_map(|(start, len, value, overwrite)| {
		Assignment {
			start,
			end: start.saturating_add(len).min(MAX_CODE_POINT),
			value,
			overwrite,
		}
	})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(24))]

	#[test]
	fn freeze_matches_builder_everywhere(
		assignments in prop::collection::vec(arb_assignment(), 0..12),
		shift in 2..=8u32,
	) {
		let options = crate::TrieOptions::with_shift(shift).unwrap();
		let mut builder = TrieBuilder::with_options(0, 0xbad, options);
		for a in &assignments {
			builder.set_range(a.start, a.end, a.value, a.overwrite).unwrap();
		}
		let trie = builder.freeze();

		prop_assert_eq!(trie.get(-1), builder.get(-1));
		for cp in 0..=CODE_POINT_COUNT {
			prop_assert_eq!(trie.get32(cp), builder.get(cp));
		}

		prop_assert_eq!(builder.freeze(), trie);
	}
}
