use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::{ReadError, Result};

/// Reads big-endian integers from an underlying byte stream.
///
/// The reader never buffers beyond the value being decoded, so the inner
/// stream is left positioned directly after the last value read.
#[derive(Debug)]
pub struct BigEndianReader<R> {
	inner: R,
	position: u64,
}

impl<R: Read> BigEndianReader<R> {
	/// Creates a reader starting at the inner stream's current position.
	pub fn new(inner: R) -> Self {
		Self { inner, position: 0 }
	}

	/// Returns the number of bytes consumed since construction or the last seek.
	pub const fn position(&self) -> u64 {
		self.position
	}

	/// Consumes the reader, returning the inner stream.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Reads exactly `N` bytes.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0u8; N];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	/// Fills `buf` completely from the stream.
	pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
		match self.inner.read_exact(buf) {
			Ok(()) => {
				self.position += buf.len() as u64;
				Ok(())
			}
			Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(ReadError::UnexpectedEof {
				offset: self.position,
				needed: buf.len(),
			}),
			Err(e) => Err(ReadError::Io(e)),
		}
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		self.read_array::<1>().map(|[b]| b)
	}

	pub fn read_u16(&mut self) -> Result<u16> {
		self.read_array().map(u16::from_be_bytes)
	}

	pub fn read_i16(&mut self) -> Result<i16> {
		self.read_array().map(i16::from_be_bytes)
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_be_bytes)
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		self.read_array().map(i32::from_be_bytes)
	}
}

impl<R: Read + Seek> BigEndianReader<R> {
	/// Moves the inner stream to an absolute byte offset.
	///
	/// [`position`](Self::position) reports `offset` afterwards.
	pub fn seek_to(&mut self, offset: u64) -> Result<()> {
		self.inner.seek(SeekFrom::Start(offset))?;
		self.position = offset;
		Ok(())
	}
}
