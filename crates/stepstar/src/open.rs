//! The frontier: discovered nodes waiting to be expanded.
//!
//! Node handles are kept sorted by descending `f`, so the cheapest node sits
//! at the end of the vector and [`OpenList::pop_min`] is a plain `pop`.
//! Among equal `f`, the node inserted first is popped first.

use crate::arena::NodeArena;
use crate::node::NodeId;

/// Open set ordered by ascending `f` with first-in-wins tie breaking.
#[derive(Debug, Default)]
pub struct OpenList {
    // Descending `f`; the minimum is `ids.last()`.
    ids: Vec<NodeId>,
    high_water: usize,
}

impl OpenList {
    /// Create an empty open list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Insert `id`, keeping the order. The node's `f` is read from `arena`.
    pub fn insert<S>(&mut self, id: NodeId, arena: &NodeArena<S>) {
        let f = arena[id].f();
        // Land behind every node of equal `f` so those pop first.
        let at = self.ids.partition_point(|&other| arena[other].f() > f);
        self.ids.insert(at, id);
        self.high_water = self.high_water.max(self.ids.len());
    }

    /// Remove and return the node with the lowest `f`.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.ids.pop()
    }

    /// Lowest-`f` node without removing it.
    pub fn peek_min(&self) -> Option<NodeId> {
        self.ids.last().copied()
    }

    /// Find the open node whose state equals `state` under `eq`.
    pub fn find_by_state<S>(
        &self,
        arena: &NodeArena<S>,
        state: &S,
        eq: impl Fn(&S, &S) -> bool,
    ) -> Option<NodeId> {
        self.iter().find(|&id| eq(arena[id].state(), state))
    }

    /// Remove a specific node. Returns `false` if it was not open.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&other| other == id) {
            Some(at) => {
                self.ids.remove(at);
                true
            }
            None => false,
        }
    }

    /// Whether `id` is currently open.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Handles in expansion order (lowest `f` first).
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().rev().copied()
    }

    /// Drop every entry. Reserved storage is kept.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the frontier is exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Largest size the list has reached.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
