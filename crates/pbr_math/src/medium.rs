use core::{fmt, num::NonZeroU32};

/// Handle to a participating medium owned by the scene.
///
/// The handle does not own the medium, the scene has to keep the medium alive for as long as any ray refers to it.
/// A ray without a medium (`Option::None`) travels through vacuum.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MediumHandle(NonZeroU32);

impl MediumHandle {
    /// Create a handle from a medium id, returns `None` for id 0
    #[inline]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Get the id of the medium
    #[inline]
    pub const fn id(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for MediumHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("medium {}", self.0))
    }
}
