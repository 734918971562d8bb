use std::io::Write;

/// Writes big-endian integers to an underlying byte sink.
#[derive(Debug)]
pub struct BigEndianWriter<W> {
	inner: W,
	position: u64,
}

impl<W: Write> BigEndianWriter<W> {
	pub fn new(inner: W) -> Self {
		Self { inner, position: 0 }
	}

	/// Returns the number of bytes written so far.
	pub const fn position(&self) -> u64 {
		self.position
	}

	/// Flushes and returns the inner sink.
	pub fn into_inner(mut self) -> std::io::Result<W> {
		self.inner.flush()?;
		Ok(self.inner)
	}

	pub fn write_bytes(&mut self, bytes: &[u8]) -> std::io::Result<()> {
		self.inner.write_all(bytes)?;
		self.position += bytes.len() as u64;
		Ok(())
	}

	pub fn write_u8(&mut self, value: u8) -> std::io::Result<()> {
		self.write_bytes(&[value])
	}

	pub fn write_u16(&mut self, value: u16) -> std::io::Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	pub fn write_i16(&mut self, value: i16) -> std::io::Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	pub fn write_u32(&mut self, value: u32) -> std::io::Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}
}
