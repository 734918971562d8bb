use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or displacement in font units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
	pub x: f32,
	pub y: f32,
}

impl Vec2 {
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Creates a new vector.
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	/// Returns the component-wise minimum.
	pub fn min(self, other: Self) -> Self {
		Self::new(self.x.min(other.x), self.y.min(other.y))
	}

	/// Returns the component-wise maximum.
	pub fn max(self, other: Self) -> Self {
		Self::new(self.x.max(other.x), self.y.max(other.y))
	}
}

impl Add for Vec2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Vec2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// A 2D affine transform stored as a 3x2 matrix.
///
/// Points are treated as row vectors, so a point `(x, y)` maps to
/// `(x * m11 + y * m21 + m31, x * m12 + y * m22 + m32)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine {
	pub m11: f32,
	pub m12: f32,
	pub m21: f32,
	pub m22: f32,
	pub m31: f32,
	pub m32: f32,
}

impl Default for Affine {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Affine {
	pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

	/// Creates a transform from its six matrix elements.
	pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
		Self {
			m11,
			m12,
			m21,
			m22,
			m31,
			m32,
		}
	}

	/// Creates a pure translation.
	pub const fn translation(dx: f32, dy: f32) -> Self {
		Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
	}

	/// Creates a scale about the origin.
	pub const fn scale(sx: f32, sy: f32) -> Self {
		Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
	}

	/// Applies the transform to a point.
	pub fn transform_point(&self, p: Vec2) -> Vec2 {
		Vec2::new(
			p.x * self.m11 + p.y * self.m21 + self.m31,
			p.x * self.m12 + p.y * self.m22 + self.m32,
		)
	}
}
