//! Contains traits implemented by the pbr derive macros


/// Trait to get the number of variants in an enum
pub trait EnumCountT {
    /// Number of variants in the enum
    const COUNT : usize;
}

/// Trait to get an enum from a given index
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self;

    /// Convert an index to an enum, without checking bounds
    ///
    /// # SAFETY
    ///
    /// The user is required to make sure that the index is an index of a valid enum variant
    unsafe fn from_idx_unchecked(idx: usize) -> Self;
}

/// Trait to parse an enum from its (configured) name
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}
