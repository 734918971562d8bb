//! Integers in `0..=0x10FFFF` are code points; everything else is out of domain.
//!
//! Lookups accept any integer through [`AsCodePoint`] so that negative or
//! oversized inputs resolve to a trie's error value instead of wrapping.

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_ffff;

/// Number of code points in the domain.
pub const CODE_POINT_COUNT: u32 = MAX_CODE_POINT + 1;

/// Integer-like values that may name a code point.
pub trait AsCodePoint: Copy {
	/// Widens the value without loss so range checks see its true sign and magnitude.
	fn as_code_point(self) -> i64;
}

impl AsCodePoint for u32 {
	fn as_code_point(self) -> i64 {
		i64::from(self)
	}
}

impl AsCodePoint for i32 {
	fn as_code_point(self) -> i64 {
		i64::from(self)
	}
}

impl AsCodePoint for i64 {
	fn as_code_point(self) -> i64 {
		self
	}
}

impl AsCodePoint for usize {
	fn as_code_point(self) -> i64 {
		i64::try_from(self).unwrap_or(i64::MAX)
	}
}

impl AsCodePoint for char {
	fn as_code_point(self) -> i64 {
		i64::from(u32::from(self))
	}
}

/// Returns the code point if `cp` lies in `0..=MAX_CODE_POINT`.
#[inline]
pub fn to_domain(cp: impl AsCodePoint) -> Option<u32> {
	u32::try_from(cp.as_code_point())
		.ok()
		.filter(|&cp| cp <= MAX_CODE_POINT)
}
