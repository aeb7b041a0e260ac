use crate::*;

impl<T: Numeric> AABB3<T> {
    /// Get one of the 8 corners of the box.
    ///
    /// Bits 0, 1 and 2 of `corner` select `max` (set) or `min` (unset) for the x, y and z axis respectively, higher bits are ignored.
    #[must_use]
    pub fn corner(self, corner: usize) -> Vec3<T> {
        Vec3::new(self[corner & 1].x,
                  self[(corner >> 1) & 1].y,
                  self[(corner >> 2) & 1].z)
    }

    /// Calculate the surface area of the box
    pub fn surface_area(self) -> T {
        let d = self.diagonal();
        T::from_i32(2) * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    /// Calculate the volume of the box
    pub fn volume(self) -> T {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Get the axis along which the box is the largest, x wins ties against y and z, y wins ties against z
    pub fn maximum_extent(self) -> Axis {
        let d = self.diagonal();
        if d.x >= d.y && d.x >= d.z {
            Axis::X
        } else if d.y >= d.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Get the center and radius of a sphere enclosing the box.
    ///
    /// The radius is 0 when the center is not inside the box, which is the case for the empty box.
    pub fn bounding_sphere(self) -> (Vec3<T>, T::Float) {
        let center = self.center();
        let radius = if self.contains(center) { center.dist(self.max) } else { T::Float::zero() };
        (center, radius)
    }
}
