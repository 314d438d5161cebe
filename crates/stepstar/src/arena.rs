//! Fixed-capacity bump arena for search nodes.
//!
//! Slots are handed out in order and only ever returned all at once through
//! [`NodeArena::reset`]. Storage for `capacity` nodes is reserved when the
//! arena is created and kept across resets, so steady-state searching does
//! not touch the allocator.

use std::ops::{Index, IndexMut};

use crate::error::SearchError;
use crate::node::{Node, NodeId};

/// Bump allocator of [`Node`]s with bulk reset.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
    capacity: usize,
    high_water: usize,
}

impl<S> NodeArena<S> {
    /// Create an arena able to hold `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
            high_water: 0,
        }
    }

    /// Take the next free slot for `state`.
    ///
    /// Fails with [`SearchError::ArenaExhausted`] once every slot is in use.
    pub fn allocate(&mut self, state: S) -> Result<NodeId, SearchError> {
        let index = self.nodes.len();
        if index >= self.capacity {
            return Err(SearchError::ArenaExhausted {
                capacity: self.capacity,
            });
        }
        let index = u32::try_from(index).map_err(|_| SearchError::ArenaExhausted {
            capacity: self.capacity,
        })?;
        self.nodes.push(Node::new(state));
        self.high_water = self.high_water.max(self.nodes.len());
        Ok(NodeId::new(index))
    }

    /// Free every slot. Reserved storage is kept.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    /// Look up a node, `None` if the handle is not currently allocated.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.index())
    }

    /// Number of slots currently in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no slot is in use.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most slots ever in use at once since the arena was created.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S> Index<NodeId> for NodeArena<S> {
    type Output = Node<S>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }
}

impl<S> IndexMut<NodeId> for NodeArena<S> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.nodes[id.index()]
    }
}
