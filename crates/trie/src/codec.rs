//! Versioned big-endian persistence for [`FrozenTrie`].
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `UTRI` |
//! | 4 | 2 | format version |
//! | 6 | 1 | block shift |
//! | 7 | 1 | reserved, zero |
//! | 8 | 4 | `high_start` |
//! | 12 | 4 | `high_value` |
//! | 16 | 4 | `error_value` |
//! | 20 | 4 | index length `n` |
//! | 24 | 4 | data length `m` |
//! | 28 | 4n | index entries |
//! | 28 + 4n | 4m | data entries |
//!
//! Every integer is unsigned and big-endian.

use std::io::{Read, Write};

use runemap_binary::{BigEndianReader, BigEndianWriter};

use crate::error::{Result, TrieError};
use crate::frozen::{FrozenTrie, validate_layout};

/// Magic bytes opening every serialized trie.
pub const MAGIC: &[u8; 4] = b"UTRI";

/// Format version written by [`FrozenTrie::save`].
pub const FORMAT_VERSION: u16 = 1;

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 28;

impl FrozenTrie {
	/// Writes the trie to `writer`.
	pub fn save<W: Write>(&self, writer: W) -> Result<()> {
		let mut out = BigEndianWriter::new(writer);
		out.write_bytes(MAGIC)?;
		out.write_u16(FORMAT_VERSION)?;
		out.write_u8(self.shift() as u8)?;
		out.write_u8(0)?;
		out.write_u32(self.high_start())?;
		out.write_u32(self.high_value())?;
		out.write_u32(self.error_value())?;
		out.write_u32(self.index().len() as u32)?;
		out.write_u32(self.data().len() as u32)?;
		for &offset in self.index() {
			out.write_u32(offset)?;
		}
		for &value in self.data() {
			out.write_u32(value)?;
		}
		tracing::trace!(bytes = out.position(), "Saved code point trie");
		out.into_inner()?;
		Ok(())
	}

	/// Serializes the trie into a new buffer.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut bytes = Vec::with_capacity(self.encoded_len());
		// Writing into a Vec cannot fail.
		let _ = self.save(&mut bytes);
		bytes
	}

	/// Exact size of the serialized form in bytes.
	pub fn encoded_len(&self) -> usize {
		HEADER_SIZE + 4 * (self.index().len() + self.data().len())
	}

	/// Reads a trie from `reader`, consuming exactly the bytes it declares.
	///
	/// # Errors
	///
	/// [`TrieError::Malformed`] if the header is invalid, the stream ends
	/// early, or the arrays violate the trie invariants. [`TrieError::Io`] if
	/// the stream itself fails.
	pub fn load<R: Read>(reader: R) -> Result<Self> {
		let mut input = BigEndianReader::new(reader);
		if &input.read_array::<4>()? != MAGIC {
			return Err(TrieError::Malformed("bad magic"));
		}
		if input.read_u16()? != FORMAT_VERSION {
			return Err(TrieError::Malformed("unsupported format version"));
		}
		let shift = u32::from(input.read_u8()?);
		if input.read_u8()? != 0 {
			return Err(TrieError::Malformed("reserved header byte is not zero"));
		}
		let high_start = input.read_u32()?;
		let high_value = input.read_u32()?;
		let error_value = input.read_u32()?;
		let index_len = input.read_u32()? as usize;
		let data_len = input.read_u32()? as usize;

		// Bounds the allocations below before trusting the declared lengths.
		validate_layout(shift, high_start, index_len, data_len)?;

		let index = read_u32s(&mut input, index_len)?;
		let data = read_u32s(&mut input, data_len)?;
		tracing::trace!(
			bytes = input.position(),
			index_len,
			data_len,
			"Loaded code point trie"
		);

		FrozenTrie::try_from_parts(shift, index, data, high_start, high_value, error_value)
	}

	/// Decodes a trie occupying all of `bytes`.
	///
	/// # Errors
	///
	/// As [`load`](Self::load), plus [`TrieError::Malformed`] if bytes remain
	/// after the declared arrays.
	pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
		let trie = Self::load(&mut bytes)?;
		if !bytes.is_empty() {
			return Err(TrieError::Malformed("trailing bytes after trie data"));
		}
		Ok(trie)
	}
}

fn read_u32s<R: Read>(input: &mut BigEndianReader<R>, len: usize) -> Result<Vec<u32>> {
	(0..len)
		.map(|_| input.read_u32().map_err(TrieError::from))
		.collect()
}
