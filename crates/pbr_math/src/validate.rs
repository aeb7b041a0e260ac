//! Precondition checks for the value types.
//!
//! Checks are active in builds with debug assertions, or when the `validate` feature is enabled.
//! When they are compiled out, violating a precondition gives an unspecified numeric result, but never undefined behavior.

/// Are precondition checks active in this build
pub const VALIDATE : bool = cfg!(any(debug_assertions, feature = "validate"));

macro_rules! math_assert {
    ($($arg:tt)*) => {
        if $crate::VALIDATE {
            assert!($($arg)*);
        }
    };
}
pub(crate) use math_assert;
