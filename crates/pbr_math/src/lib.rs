//! Geometry primitives for a physically based renderer.
//!
//! Contains generic 2D and 3D vectors, axis-aligned bounding boxes with set operations (union, intersection, overlap),
//! and rays with optional differentials.
//!
//! All types are plain values, generic over a scalar [`Numeric`] type, with aliases for the common instantiations (e.g. [`f32v3`], [`i32aabb3`]).
//! Preconditions (no NaN components, no division by a zero scalar) are checked according to [`VALIDATE`],
//! out of range indexing always panics.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod validate;
pub use validate::VALIDATE;

mod utils;

mod axis;
pub use axis::*;

mod vec;
pub use vec::*;

mod aabb;
pub use aabb::*;

mod medium;
pub use medium::*;

mod ray;
pub use ray::*;
