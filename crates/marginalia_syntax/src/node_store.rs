//! Annotation node identity allocation with generational indices.
//!
//! The `NodeStore` hands out [`NodeId`]s for annotation nodes and tracks
//! generations so that an id released by a remove or a replace is never
//! resolved again, even after its slot is reused.

// Allow u32 to usize casts - slot counts stay far below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use marginalia_foundation::NodeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Allocates and retires annotation node identities.
///
/// Ids are allocated from a free list when available, otherwise new slots
/// are allocated. When a node is released, its slot is added to the free
/// list and its generation is incremented.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeStore {
    /// Generation counter for each slot.
    /// Even generations are free, odd generations are live.
    generations: Vec<u32>,
    /// Free list of slots available for reuse.
    free_list: Vec<u32>,
    /// Count of live nodes.
    live_count: usize,
}

impl NodeStore {
    /// Creates a new empty node store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh node id.
    pub fn allocate(&mut self) -> NodeId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            // Was even/free, now odd/live
            self.generations[idx] += 1;
            NodeId::new(index, self.generations[idx])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(1);
            NodeId::new(index, 1)
        }
    }

    /// Releases a node id.
    ///
    /// Returns `false` if the id was already released or never allocated.
    pub fn release(&mut self, id: NodeId) -> bool {
        if !self.is_live(id) {
            return false;
        }

        let idx = id.index as usize;
        // Was odd/live, now even/free
        self.generations[idx] += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;
        true
    }

    /// Checks if a node id is live.
    #[must_use]
    pub fn is_live(&self, id: NodeId) -> bool {
        self.generations
            .get(id.index as usize)
            .is_some_and(|&generation| generation == id.generation && generation % 2 == 1)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }
}
