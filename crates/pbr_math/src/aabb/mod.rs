use std::ops::{Index, IndexMut};
use crate::{numeric::*, Vec2, Vec3};

mod aabb2;
mod aabb3;

macro_rules! generic_aabb {
    {
        $docs:meta;
        $name:ident,
        $vec:ident,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        ///
        /// A valid box has `min <= max` on every axis. The empty box is inverted on every axis (`min = T::MAX`, `max = T::MIN`),
        /// so it loses every min/max comparison when it's combined with another box or a point.
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Numeric> {
            pub min : $vec<T>,
            pub max : $vec<T>,
        }

        impl<T: Numeric> $name<T> {
            /// Create the empty box
            #[inline]
            #[must_use]
            pub fn empty() -> Self {
                Self { min: $vec::set(T::MAX), max: $vec::set(T::MIN) }
            }

            /// Create a box only containing a single point
            #[inline]
            #[must_use]
            pub fn from_point(p: $vec<T>) -> Self {
                Self { min: p, max: p }
            }

            /// Create the smallest box containing 2 points, the points don't need to be ordered
            #[inline]
            #[must_use]
            pub fn new(p1: $vec<T>, p2: $vec<T>) -> Self {
                Self { min: p1.min(p2), max: p1.max(p2) }
            }

            /// Check if the box is inverted on any axis, e.g. the empty box or a non-overlapping intersection
            #[inline]
            pub fn is_empty(self) -> bool {
                $(self.min.$comp > self.max.$comp)||+
            }

            /// Get the vector from `min` to `max`.
            ///
            /// An empty box has a zero diagonal, so its measures (area, volume, ..) are 0.
            #[inline]
            #[must_use]
            pub fn diagonal(self) -> $vec<T> {
                if self.is_empty() {
                    return $vec::zero();
                }
                self.max - self.min
            }

            /// Get the center of the box
            #[inline]
            #[must_use]
            pub fn center(self) -> $vec<T> {
                (self.min + self.max) / T::from_i32(2)
            }

            /// Get the position of `p` relative to the box, (0, .., 0) at `min` and (1, .., 1) at `max`.
            ///
            /// Axes on which the box has no extent are not normalized, and hold the offset of `p` from `min`.
            pub fn offset(self, p: $vec<T>) -> $vec<T> {
                let mut o = p - self.min;
                $(
                    if self.max.$comp > self.min.$comp {
                        o.$comp /= self.max.$comp - self.min.$comp;
                    }
                )+
                o
            }

            /// Get the smallest box containing both the box and `p`
            #[inline]
            #[must_use]
            pub fn union_point(self, p: $vec<T>) -> Self {
                Self { min: self.min.min(p), max: self.max.max(p) }
            }

            /// Get the smallest box containing both boxes
            #[inline]
            #[must_use]
            pub fn union(self, other: Self) -> Self {
                Self { min: self.min.min(other.min), max: self.max.max(other.max) }
            }

            /// Get the intersection of both boxes.
            ///
            /// If the boxes don't overlap, the result is inverted on at least 1 axis, see [`Self::overlaps`] and [`Self::is_empty`]
            #[inline]
            #[must_use]
            pub fn intersect(self, other: Self) -> Self {
                Self { min: self.min.max(other.min), max: self.max.min(other.max) }
            }

            /// Check if 2 boxes overlap, boxes that only touch overlap
            #[inline]
            pub fn overlaps(self, other: Self) -> bool {
                $((self.max.$comp >= other.min.$comp && self.min.$comp <= other.max.$comp))&&+
            }

            /// Check if the box contains a point, points on the boundary are inside
            #[inline]
            pub fn contains(self, p: $vec<T>) -> bool {
                $((p.$comp >= self.min.$comp && p.$comp <= self.max.$comp))&&+
            }

            /// Check if the box contains a point, points on the boundary are outside
            #[inline]
            pub fn contains_exclusive(self, p: $vec<T>) -> bool {
                $((p.$comp > self.min.$comp && p.$comp < self.max.$comp))&&+
            }

            /// Grow the box by `delta` in every direction
            #[inline]
            #[must_use]
            pub fn expand(self, delta: T) -> Self {
                Self { min: self.min - delta, max: self.max + delta }
            }
        }

        impl<T: Real> $name<T> {
            /// Interpolate between `min` and `max`, using a separate parameter per axis
            #[must_use]
            pub fn lerp(self, t: $vec<T>) -> $vec<T> {
                $vec::new($(T::lerp(t.$comp, self.min.$comp, self.max.$comp)),+)
            }
        }

        impl<T: Numeric> Default for $name<T> {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl<T: Numeric> Index<usize> for $name<T> {
            type Output = $vec<T>;

            /// Index 0 is `min`, index 1 is `max`
            fn index(&self, index: usize) -> &$vec<T> {
                match index {
                    0 => &self.min,
                    1 => &self.max,
                    _ => panic!("index {index} is out of range for {}, expected 0 or 1", stringify!($name)),
                }
            }
        }

        impl<T: Numeric> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                match index {
                    0 => &mut self.min,
                    1 => &mut self.max,
                    _ => panic!("index {index} is out of range for {}, expected 0 or 1", stringify!($name)),
                }
            }
        }

        impl<T: Numeric> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                self.min.is_close_to(rhs.min, epsilon) &&
                self.max.is_close_to(rhs.max, epsilon)
            }
        }

        impl<T: Numeric> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_fmt(format_args!("[ min: {}, max: {} ]", self.min, self.max))
            }
        }

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_aabb!{ doc = "2D axis-aligned bounding box"; AABB2, Vec2, x, y; i32aabb2 => i32, f32aabb2 => f32, f64aabb2 => f64 }
generic_aabb!{ doc = "3D axis-aligned bounding box"; AABB3, Vec3, x, y, z; i32aabb3 => i32, f32aabb3 => f32, f64aabb3 => f64 }
