use std::ops::*;
use crate::{
    numeric::*,
    validate::math_assert,
};

mod vec2;
mod vec3;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        ///
        /// No component may be NaN: this is checked on construction and on the result of every operation, see [`crate::VALIDATE`].
        /// Writing a NaN through a public field or `IndexMut` bypasses the check.
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Copy> {
            $(pub $comp: T,)+
        }

        impl<T: Numeric> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp: $comp),+ }.validated()
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                Self{ $($comp: val),+ }.validated()
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }.validated()
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Check if any of the components is NaN
            #[inline]
            pub fn has_nans(self) -> bool {
                $(self.$comp.is_nan())||+
            }

            #[inline(always)]
            fn validated(self) -> Self {
                math_assert!(!self.has_nans(), "vector contains a NaN component: {:?}", self);
                self
            }

        //--------------------------------------------------------------

            /// Calculate the dot product of 2 vectors
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            pub fn len_sq(self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * self.$comp)+)
            }

            /// Calculate the length of the vector
            #[inline]
            pub fn len(self) -> T::Float {
                self.len_sq().to_float().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            pub fn dist_sq(self, other: Self) -> T {
                (self - other).len_sq()
            }

            /// Calculate the distance between 2 vectors
            pub fn dist(self, other: Self) -> T::Float {
                (self - other).len()
            }

            /// Get the component-wise absolute value
            pub fn abs(self) -> Self {
                Self{ $($comp: self.$comp.abs()),+ }
            }

            /// Get the component-wise minimum of 2 vectors
            pub fn min(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Get the component-wise maximum of 2 vectors
            pub fn max(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            generic_vec!{ @first $($comp),+ }
        }

        impl<T: Real> $name<T> {
            /// Get a normalized copy of the vector, normalizing a zero-length vector is a precondition violation
            #[inline]
            #[must_use]
            pub fn normalize(self) -> Self {
                self / self.len()
            }

            /// Normalize the vector in place
            #[inline]
            pub fn normalize_in_place(&mut self) {
                *self = self.normalize();
            }

            /// Check if the length of the vector is within `epsilon` of 1
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                self.len_sq().is_close_to(T::one(), epsilon)
            }

            /// Check if the vector is normalized, allowing for the rounding error of a normalization
            pub fn is_normalized(self) -> bool {
                self.is_close_to_normalized(T::EPSILON * T::from_i32(8))
            }

            /// Get the component-wise floor
            pub fn floor(self) -> Self {
                Self{ $($comp: self.$comp.floor()),+ }
            }

            /// Get the component-wise ceil
            pub fn ceil(self) -> Self {
                Self{ $($comp: self.$comp.ceil()),+ }
            }

            /// Linearly interpolate between 2 vectors, `t` is not clamped to [0, 1]
            pub fn lerp(self, other: Self, t: T) -> Self {
                self + (other - self) * t
            }
        }

        impl<T: Signed> $name<T> {
            /// Flip the vector if needed, so it lies in the same hemisphere as `v`
            pub fn face_forward(self, v: Self) -> Self {
                if self.dot(v) < T::zero() { -self } else { self }
            }
        }

        impl<T: Copy> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                let comps = [$(&self.$comp),+];
                match comps.get(index) {
                    Some(comp) => *comp,
                    None => panic!("index {index} is out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T: Copy> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                let comps = [$(&mut self.$comp),+];
                match comps.into_iter().nth(index) {
                    Some(comp) => comp,
                    None => panic!("index {index} is out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T: Numeric> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        impl<T: Numeric> One for $name<T> {
            fn one() -> Self {
                Self{ $($comp: T::one()),+ }
            }
        }

        impl<T: Numeric> Default for $name<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        generic_vec!{ @op $name, Add, add, AddAssign, add_assign, +, +=, $($comp),+ }
        generic_vec!{ @op $name, Sub, sub, SubAssign, sub_assign, -, -=, $($comp),+ }
        generic_vec!{ @op $name, Mul, mul, MulAssign, mul_assign, *, *=, $($comp),+ }

        // Scalar-on-left operators can't be implemented generically, see `impl_vec_premul`

        //--------------------------------------------------------------

        impl<T: Numeric> Div for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp / rhs.$comp),+ }.validated()
            }
        }

        impl<T: Numeric> DivAssign for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<T: Numeric> Div<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                math_assert!(rhs != T::zero(), "division of {} by zero", stringify!($name));
                Self::from_array(T::div_uniform(self.to_array(), rhs))
            }
        }

        impl<T: Numeric> DivAssign<T> for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Signed> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Numeric> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Numeric> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
    (@op $name:ident, $trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $op:tt, $assign_op:tt, $($comp:ident),+) => {
        impl<T: Numeric> $trait for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $fun(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp $op rhs.$comp),+ }.validated()
            }
        }

        impl<T: Numeric> $assign_trait for $name<T> {
            #[inline(always)]
            fn $assign_fun(&mut self, rhs: Self) {
                $(self.$comp $assign_op rhs.$comp;)+
                self.validated();
            }
        }

        impl<T: Numeric> $trait<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $fun(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp $op rhs),+ }.validated()
            }
        }

        impl<T: Numeric> $assign_trait<T> for $name<T> {
            #[inline(always)]
            fn $assign_fun(&mut self, rhs: T) {
                $(self.$comp $assign_op rhs;)+
                self.validated();
            }
        }
    };
    (@first $comp0:ident, $($comp:ident),*) => {
        /// Get the minimum component of the vector
        pub fn min_component(self) -> T {
            self.$comp0$(.min(self.$comp))*
        }

        /// Get the maximum component of the vector
        pub fn max_component(self) -> T {
            self.$comp0$(.max(self.$comp))*
        }
    }
}

generic_vec!{ doc = "2D Vector"; Vec2, 2, x, y; i32v2 => i32, f32v2 => f32, f64v2 => f64 }
generic_vec!{ doc = "3D Vector"; Vec3, 3, x, y, z; i32v3 => i32, f32v3 => f32, f64v3 => f64 }

macro_rules! impl_vec_premul {
    ($iden:ident, $($ty:ty)*) => {
        $(
            impl Add<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                #[inline(always)]
                fn add(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs + self
                }
            }

            impl Sub<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                #[inline(always)]
                fn sub(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    $iden::set(self) - rhs
                }
            }

            impl Mul<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                #[inline(always)]
                fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs * self
                }
            }

            impl Div<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                #[inline(always)]
                fn div(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    $iden::set(self) / rhs
                }
            }
        )*
    };
}
impl_vec_premul!{ Vec2, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
impl_vec_premul!{ Vec3, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
