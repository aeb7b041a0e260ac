use core::fmt::{Debug, Display};
use std::ops::*;
use crate::MathConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_identities {
    {$($ty:ty),*} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { 0 as $ty }
            }

            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { 1 as $ty }
            }
        )*
    };
}
impl_identities!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that is a partial implementation of a `Numeric`
pub trait NumericBase : Sized + Clone + Copy + One + Zero + PartialEq + PartialOrd + Debug + Display +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign
{
    /// Machine epsilon
    const EPSILON : Self;

    /// Floating point type lengths and distances of this type are expressed in
    type Float : Real;

    /// Get the minimum of 2 `Numeric`s
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 `Numeric`s
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute difference of 2 values
    fn abs_diff(self, rhs: Self) -> Self;
    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Check if the value is not-a-number, always `false` for integral types
    fn is_nan(self) -> bool;

    /// Convert the value to its floating point type
    fn to_float(self) -> Self::Float;

    /// Divide all values by the same divisor.
    ///
    /// Floating point types calculate the reciprocal once and multiply by it, so all values are scaled consistently.
    #[inline]
    fn div_uniform<const N: usize>(vals: [Self; N], divisor: Self) -> [Self; N] {
        vals.map(|val| val / divisor)
    }

    /// Create a numeric from an `i32`
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_numeric {
    {@signed $ty:ty, $float:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            type Float = $float;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                self.abs_diff(rhs) as $ty
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                self.signum()
            }

            fn is_nan(self) -> bool {
                false
            }

            fn to_float(self) -> $float {
                self as $float
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@unsigned $ty:ty, $float:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            type Float = $float;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                self.abs_diff(rhs)
            }

            fn abs(self) -> Self {
                self
            }

            fn sign(self) -> Self {
                if self == 0 { 0 } else { 1 }
            }

            fn is_nan(self) -> bool {
                false
            }

            fn to_float(self) -> $float {
                self as $float
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = <$ty>::EPSILON;

            type Float = $ty;

            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn is_nan(self) -> bool {
                self.is_nan()
            }

            fn to_float(self) -> $ty {
                self
            }

            #[inline]
            fn div_uniform<const N: usize>(vals: [Self; N], divisor: Self) -> [Self; N] {
                let inv_divisor = 1 as $ty / divisor;
                vals.map(|val| val * inv_divisor)
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}

impl_numeric!{ @signed i8, f32 }
impl_numeric!{ @signed i16, f32 }
impl_numeric!{ @signed i32, f32 }
impl_numeric!{ @signed i64, f64 }
impl_numeric!{ @unsigned u8, f32 }
impl_numeric!{ @unsigned u16, f32 }
impl_numeric!{ @unsigned u32, f32 }
impl_numeric!{ @unsigned u64, f64 }
impl_numeric!{ @fp f32 }
impl_numeric!{ @fp f64 }

/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : NumericBase;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs_diff(self, rhs) <= epsilon
                }
            }
        )*
    };
}
impl_approx_eq!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    type Epsilon: NumericBase;

    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to 0, using the machine epsilon
    fn is_zero(self) -> bool {
        self.is_close_to_zero(Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx_zero {
    {$($ty:ty),*} => {
        $(
            impl ApproxZero for $ty {
                type Epsilon = $ty;

                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs_diff(self, 0 as $ty) <= epsilon
                }
            }
        )*
    };
}
impl_approx_zero!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that is numeric
pub trait Numeric : NumericBase + ApproxEq<Epsilon = Self> + ApproxZero<Epsilon = Self> + MathConsts {

}

impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Arithmatic type representing a signed number
pub trait Signed : Numeric + Neg<Output = Self>
{}

impl Signed for i8 {}
impl Signed for i16 {}
impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for f32 {}
impl Signed for f64 {}

/// Arithmatic type representing a real number, which is its own floating point type
pub trait Real : Signed + NumericBase<Float = Self> {
    /// Get a ceil of the value
    fn ceil(self) -> Self;
    /// Get a floor of the value
    fn floor(self) -> Self;
    /// Round the value to the nearest integer
    fn round(self) -> Self;
    /// Get the fractional part of the value
    fn fract(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;

    /// Positive infinity
    fn infinity() -> Self;
    /// Check if the value is neither infinite nor NaN
    fn is_finite(self) -> bool;

    /// Linearly interpolate between `a` and `b`, `t` is not clamped
    fn lerp(t: Self, a: Self, b: Self) -> Self {
        (Self::one() - t) * a + t * b
    }

    /// Create a numeric from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a numeric from an f64
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            fn ceil(self) -> Self {
                self.ceil()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn fract(self) -> Self {
                self.fract()
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn infinity() -> Self {
                <$ty>::INFINITY
            }

            fn is_finite(self) -> bool {
                self.is_finite()
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}
