use core::ops::{Index, IndexMut};
use pbr_common_macros::{EnumCount, EnumDisplay, EnumFromIndex};
use crate::{Vec2, Vec3};

/// Coordinate axis, used to select a component of a vector or an extent of a bounding box
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum Axis {
    #[display("x")]
    X = 0,
    #[display("y")]
    Y = 1,
    #[display("z")]
    Z = 2,
}

impl Axis {
    /// Index of the component this axis selects
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl<T: Copy> Index<Axis> for Vec3<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T: Copy> IndexMut<Axis> for Vec3<T> {
    #[inline(always)]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T: Copy> Index<Axis> for Vec2<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => panic!("Vec2 has no z-component"),
        }
    }
}

impl<T: Copy> IndexMut<Axis> for Vec2<T> {
    #[inline(always)]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => panic!("Vec2 has no z-component"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pbr_base::{EnumCountT, EnumFromIndexT};
    use crate::*;

    #[test]
    fn axis_enum() {
        assert_eq!(Axis::COUNT, 3);
        assert_eq!(Axis::from_idx(1), Some(Axis::Y));
        assert_eq!(Axis::from_idx(3), None);
        assert_eq!(usize::from(Axis::Z), 2);
        assert_eq!(Axis::X.to_string(), "x");
    }

    #[test]
    fn index_by_axis() {
        let mut v = Vec3::new(1, 2, 3);
        assert_eq!(v[Axis::Z], 3);
        v[Axis::Y] = 5;
        assert_eq!(v, Vec3::new(1, 5, 3));
        assert_eq!(Vec2::new(4, 6)[Axis::Y], 6);
    }

    #[test]
    #[should_panic]
    fn vec2_z_axis_panics() {
        let _ = Vec2::new(4, 6)[Axis::Z];
    }
}
