use std::fmt::Display;
use crate::*;

impl<T: Numeric> Vec3<T> {
    /// Shrink a `Vec3` to a `Vec2`, dropping the z-component
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }

    /// Calculate the cross product of 2 vectors, using the right-handed convention
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Vec3::new(self.y * rhs.z - self.z * rhs.y,
                  self.z * rhs.x - self.x * rhs.z,
                  self.x * rhs.y - self.y * rhs.x)
    }

    /// Get the axis of the largest component.
    ///
    /// x and y are compared first, the winner is then compared against z, so a tie with z resolves to z.
    pub fn max_dimension(self) -> Axis {
        if self.x > self.y {
            if self.x > self.z { Axis::X } else { Axis::Z }
        } else if self.y > self.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Get the axis of the smallest component.
    ///
    /// x and y are compared first, the winner is then compared against z, so a tie with z resolves to z.
    pub fn min_dimension(self) -> Axis {
        if self.x < self.y {
            if self.x < self.z { Axis::X } else { Axis::Z }
        } else if self.y < self.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Swizzle the components of the vector, components may be repeated
    pub fn swizzle(self, x: Axis, y: Axis, z: Axis) -> Self {
        Self { x: self[x], y: self[y], z: self[z] }
    }

    /// Swizzle the components of the vector into a `Vec2`
    pub fn swizzle2(self, x: Axis, y: Axis) -> Vec2<T> {
        Vec2 { x: self[x], y: self[y] }
    }
}

impl<T: Real> Vec3<T> {
    /// Build 2 vectors that form an orthonormal, right-handed basis together with `self`, which is expected to be normalized.
    ///
    /// Returns `(forward, side)`, where `side = self x forward`.
    pub fn coordinate_system(self) -> (Self, Self) {
        let forward = if self.x.abs() > self.y.abs() {
            Vec3::new(self.z, T::zero(), -self.x) / (self.x * self.x + self.z * self.z).sqrt()
        } else {
            Vec3::new(T::zero(), -self.z, self.y) / (self.y * self.y + self.z * self.z).sqrt()
        };
        (forward, self.cross(forward))
    }
}

impl<T: Numeric + Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[ {}, {}, {} ]", self.x, self.y, self.z))
    }
}
