//! Identifiers for syntax nodes and declarations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Annotation node identifier with generational index.
///
/// Every annotation node in a source unit gets a fresh `NodeId` when it is
/// constructed. When a node is removed or replaced, its slot's generation
/// advances, so an id captured before the change never matches again.
///
/// # Layout
/// - `index`: 32-bit slot index in the unit's node store
/// - `generation`: 32-bit generation counter
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId {
    /// Slot index in the node store.
    pub index: u32,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl NodeId {
    /// Creates a new node ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.index)
    }
}

/// Declaration identifier.
///
/// An index into the declaration arena of one source unit. Declarations are
/// never destroyed while their unit is alive, so no generation is needed.
/// Holding a `DeclId` does not keep anything alive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclId(pub u32);

impl DeclId {
    /// Returns the raw index of this declaration.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decl({})", self.0)
    }
}

/// Global counter for unit identities.
static UNIT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Source unit identifier.
///
/// Node and declaration ids are only unique within one unit; a `UnitId`
/// tells units apart. Every call to [`UnitId::fresh`] returns a new value
/// for the lifetime of the process.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitId(u64);

impl UnitId {
    /// Returns a process-unique unit id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(UNIT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
