/// Trait that defines common math constants
pub trait MathConsts {
    /// Minimum (lowest finite) value
    const MIN : Self;
    /// Maximum value
    const MAX : Self;

    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// 1 / pi
    const ONE_OVER_PI : Self;

    /// sqrt(2)
    const ROOT_TWO : Self;
    /// sqrt(3)
    const ROOT_THREE : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const MIN         : $ty = <$ty>::MIN;
                const MAX         : $ty = <$ty>::MAX;

                const PI          : $ty = 3.14159265358979323846264338327950288 as $ty;
                const TWO_PI      : $ty = 6.28318530717958647692528676655900576 as $ty;
                const HALF_PI     : $ty = 1.57079632679489661923132169163975144 as $ty;
                const ONE_OVER_PI : $ty = 0.318309886183790671537767526745028724 as $ty;

                const ROOT_TWO    : $ty = 1.41421356237309504880168872420969808 as $ty;
                const ROOT_THREE  : $ty = 1.73205080756887729352744634150587237 as $ty;
            }
        )*
    };
}
impl_math_constants!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

#[cfg(test)]
mod tests {
    use super::MathConsts;

    #[test]
    fn min_is_lowest_finite() {
        assert_eq!(<f32 as MathConsts>::MIN, f32::MIN);
        assert!(<f32 as MathConsts>::MIN < 0f32);
        assert!(<f64 as MathConsts>::MIN.is_finite());
        assert_eq!(<i32 as MathConsts>::MIN, i32::MIN);
        assert_eq!(<u8 as MathConsts>::MIN, 0);
    }

    #[test]
    fn roots() {
        assert!((<f64 as MathConsts>::ROOT_THREE * <f64 as MathConsts>::ROOT_THREE - 3.0).abs() < 1e-12);
        assert_eq!(<i32 as MathConsts>::ROOT_TWO, 1);
    }
}
