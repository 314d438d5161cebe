//! Search node records and their arena handles.

/// Path cost and heuristic value type.
pub type Cost = f32;

/// Stable handle to a node slot in a [`NodeArena`](crate::NodeArena).
///
/// Handles are only meaningful for the search that allocated them; after
/// [`release_nodes`](crate::AStarSearch::release_nodes) the same index may
/// name an unrelated node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the slot inside the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One domain state as seen by the search.
#[derive(Clone, Debug)]
pub struct Node<S> {
    pub(crate) state: S,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    /// Predecessor on the best known path.
    pub(crate) parent: Option<NodeId>,
    /// Successor on the solution path; only written after the goal is found.
    pub(crate) child: Option<NodeId>,
}

impl<S> Node<S> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state,
            g: 0.0,
            h: 0.0,
            parent: None,
            child: None,
        }
    }

    /// The domain state wrapped by this node.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accumulated cost from the start.
    #[inline]
    pub fn g(&self) -> Cost {
        self.g
    }

    /// Heuristic estimate of the remaining cost.
    #[inline]
    pub fn h(&self) -> Cost {
        self.h
    }

    /// Frontier priority, always `g + h`.
    #[inline]
    pub fn f(&self) -> Cost {
        self.g + self.h
    }

    /// Node this one was reached from.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Next node on the solution path.
    #[inline]
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }
}
