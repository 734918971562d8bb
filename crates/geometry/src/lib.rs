//! Geometry value types for glyph metrics.
//!
//! These types carry no font or rendering dependencies. [`Bounds`] is read
//! straight out of font tables through [`runemap_binary::BigEndianReader`].

/// Axis-aligned bounding boxes.
pub mod bounds;
/// Points, vectors and affine transforms.
pub mod vector;

pub use bounds::Bounds;
pub use vector::{Affine, Vec2};
