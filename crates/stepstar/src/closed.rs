//! The expanded set: nodes whose successors have been generated.

use crate::arena::NodeArena;
use crate::node::NodeId;

/// Unordered closed set.
#[derive(Debug, Default)]
pub struct ClosedList {
    ids: Vec<NodeId>,
    high_water: usize,
}

impl ClosedList {
    /// Create an empty closed list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Mark `id` as expanded.
    pub fn insert(&mut self, id: NodeId) {
        self.ids.push(id);
        self.high_water = self.high_water.max(self.ids.len());
    }

    /// Find the closed node whose state equals `state` under `eq`.
    pub fn find_by_state<S>(
        &self,
        arena: &NodeArena<S>,
        state: &S,
        eq: impl Fn(&S, &S) -> bool,
    ) -> Option<NodeId> {
        self.ids
            .iter()
            .copied()
            .find(|&id| eq(arena[id].state(), state))
    }

    /// Remove `id`. Order is not preserved. Returns `false` if absent.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&other| other == id) {
            Some(at) => {
                self.ids.swap_remove(at);
                true
            }
            None => false,
        }
    }

    /// Whether `id` has been expanded.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Handles in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Drop every entry. Reserved storage is kept.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of expanded nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been expanded.
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
