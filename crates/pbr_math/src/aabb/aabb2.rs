use crate::*;

impl<T: Numeric> AABB2<T> {
    /// Get one of the 4 corners of the box.
    ///
    /// Bits 0 and 1 of `corner` select `max` (set) or `min` (unset) for the x and y axis respectively, higher bits are ignored.
    #[must_use]
    pub fn corner(self, corner: usize) -> Vec2<T> {
        Vec2::new(self[corner & 1].x, self[(corner >> 1) & 1].y)
    }

    /// Calculate the area of the box
    pub fn area(self) -> T {
        let d = self.diagonal();
        d.x * d.y
    }

    /// Get the axis along which the box is the largest, x wins ties
    pub fn maximum_extent(self) -> Axis {
        let d = self.diagonal();
        if d.x >= d.y { Axis::X } else { Axis::Y }
    }

    /// Get the center and radius of a circle enclosing the box.
    ///
    /// The radius is 0 when the center is not inside the box, which is the case for the empty box.
    pub fn bounding_circle(self) -> (Vec2<T>, T::Float) {
        let center = self.center();
        let radius = if self.contains(center) { center.dist(self.max) } else { T::Float::zero() };
        (center, radius)
    }
}
