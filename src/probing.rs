use std::fmt;

use crate::hash;

/// Collision-resolution strategy, fixed when a [`Table`](crate::Table) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Probing {
    /// Every probe advances by one slot.
    #[default]
    Linear,
    /// Every probe advances by the key-derived [`hash::step`].
    Double,
}

impl Probing {
    /// Distance between consecutive slots of a key's probe sequence.
    pub const fn stride(self, hashed: u32, capacity: usize) -> usize {
        match self {
            Self::Linear => 1,
            Self::Double => hash::step(hashed, capacity),
        }
    }
}

impl fmt::Display for Probing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "Linear Probing",
            Self::Double => "Double Hashing",
        })
    }
}
