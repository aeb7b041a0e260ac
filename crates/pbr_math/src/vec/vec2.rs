use std::fmt::Display;
use crate::*;

impl<T: Numeric> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Calculate the 2D cross product, i.e. the z-component of the cross product of both vectors extended with z = 0
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the axis of the largest component, a tie resolves to y
    pub fn max_dimension(self) -> Axis {
        if self.x > self.y { Axis::X } else { Axis::Y }
    }

    /// Get the axis of the smallest component, a tie resolves to y
    pub fn min_dimension(self) -> Axis {
        if self.x < self.y { Axis::X } else { Axis::Y }
    }

    /// Swizzle the components of the vector, components may be repeated.
    ///
    /// Panics when `Axis::Z` is passed.
    pub fn swizzle(self, x: Axis, y: Axis) -> Self {
        Self { x: self[x], y: self[y] }
    }
}

impl<T: Numeric + Display> Display for Vec2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[ {}, {} ]", self.x, self.y))
    }
}
