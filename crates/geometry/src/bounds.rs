use std::io::Read;

use runemap_binary::BigEndianReader;

use crate::vector::{Affine, Vec2};

/// An axis-aligned bounding box.
///
/// `min` is always component-wise less than or equal to `max`; the
/// constructors reorder corners to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
	min: Vec2,
	max: Vec2,
}

impl Bounds {
	pub const EMPTY: Self = Self {
		min: Vec2::ZERO,
		max: Vec2::ZERO,
	};

	/// Creates a box spanning two opposite corners, in any order.
	pub fn new(a: Vec2, b: Vec2) -> Self {
		Self {
			min: a.min(b),
			max: a.max(b),
		}
	}

	/// Creates a box from its edge coordinates.
	pub fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
		Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
	}

	/// Reads a box stored as four big-endian `i16` values: minX, minY, maxX, maxY.
	pub fn load<R: Read>(reader: &mut BigEndianReader<R>) -> runemap_binary::Result<Self> {
		let min_x = reader.read_i16()?;
		let min_y = reader.read_i16()?;
		let max_x = reader.read_i16()?;
		let max_y = reader.read_i16()?;
		Ok(Self::from_coords(
			f32::from(min_x),
			f32::from(min_y),
			f32::from(max_x),
			f32::from(max_y),
		))
	}

	pub const fn min(&self) -> Vec2 {
		self.min
	}

	pub const fn max(&self) -> Vec2 {
		self.max
	}

	/// Returns the width and height of the box.
	pub fn size(&self) -> Vec2 {
		self.max - self.min
	}

	/// Maps both stored corners through `matrix` and re-normalizes.
	///
	/// Only `min` and `max` are transformed. Under rotation or skew the result
	/// does not enclose the other two corners of the original box.
	pub fn transform(&self, matrix: &Affine) -> Self {
		Self::new(
			matrix.transform_point(self.min),
			matrix.transform_point(self.max),
		)
	}
}
