//! `serde` support for [`FrozenTrie`].
//!
//! Deserialized parts go through [`FrozenTrie::try_from_parts`], so a
//! corrupted payload is rejected instead of producing a trie that could index
//! out of bounds.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::frozen::FrozenTrie;

#[derive(Serialize)]
struct FrozenTrieRef<'a> {
	shift: u32,
	high_start: u32,
	high_value: u32,
	error_value: u32,
	index: &'a [u32],
	data: &'a [u32],
}

#[derive(Deserialize)]
struct FrozenTrieOwned {
	shift: u32,
	high_start: u32,
	high_value: u32,
	error_value: u32,
	index: Vec<u32>,
	data: Vec<u32>,
}

impl Serialize for FrozenTrie {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		FrozenTrieRef {
			shift: self.shift(),
			high_start: self.high_start(),
			high_value: self.high_value(),
			error_value: self.error_value(),
			index: self.index(),
			data: self.data(),
		}
		.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for FrozenTrie {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let parts = FrozenTrieOwned::deserialize(deserializer)?;
		FrozenTrie::try_from_parts(
			parts.shift,
			parts.index,
			parts.data,
			parts.high_start,
			parts.high_value,
			parts.error_value,
		)
		.map_err(D::Error::custom)
	}
}
