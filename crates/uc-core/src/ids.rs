//! Arena identifiers for the conversion graph.
//!
//! Vertices, edges and components all live in insertion-ordered vectors;
//! an `Id` is a typed position into one of those arenas. Storing the
//! position shifted by one in a `NonZeroU32` keeps `Option<Id>` the same
//! size as `Id`, which the decomposition relies on for its per-vertex
//! component table.

use core::fmt;
use core::num::NonZeroU32;

/// Position of a vertex, edge or component in its owning arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Wrap a 0-based arena position; the slot holds `index + 1` so zero
    /// stays free as the niche.
    pub fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).expect("arena holds fewer than u32::MAX entries");
        Self(NonZeroU32::new(raw + 1).expect("index + 1 is nonzero"))
    }

    /// The 0-based arena position, ready for slice indexing.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id#{}", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Typed aliases so signatures say which arena they index.
pub type VertexId = Id;
pub type EdgeId = Id;
pub type ComponentId = Id;
