use crate::arena::NodeArena;
use crate::error::SearchError;
use crate::node::{Cost, NodeId};

/// The capabilities the engine needs from a problem domain.
///
/// A domain describes a state space: how states connect, what moving
/// between them costs, and how far a state is estimated to be from the goal.
/// The engine never inspects a [`State`](Self::State) itself; every question
/// about states goes through this trait.
pub trait SearchDomain {
    /// One point of the state space. Stored by value in the node arena, so
    /// it should be cheap to clone (a small value or a handle into storage
    /// the domain owns).
    type State: Clone;

    /// Estimated remaining cost from `candidate` to `goal`.
    /// Must never overestimate for the returned path to be optimal.
    fn heuristic(&self, candidate: &Self::State, goal: &Self::State) -> Cost;

    /// Whether `candidate` satisfies the goal.
    fn is_goal(&self, candidate: &Self::State, goal: &Self::State) -> bool;

    /// Push every state reachable in one move from `current` into
    /// `successors`, except `parent` (the state `current` was reached from).
    ///
    /// Return `false` if the domain ran out of its own resources; the search
    /// then ends in [`SearchState::OutOfMemory`](crate::SearchState::OutOfMemory).
    fn generate_successors(
        &mut self,
        current: &Self::State,
        parent: Option<&Self::State>,
        successors: &mut Successors<'_, Self::State>,
    ) -> bool;

    /// Cost of moving from `from` to the adjacent state `to`. Must be >= 0.
    fn edge_cost(&self, from: &Self::State, to: &Self::State) -> Cost;

    /// Whether `a` and `b` are the same search state.
    fn states_equal(&self, a: &Self::State, b: &Self::State) -> bool;
}

/// Staging area for the successors of the node being expanded.
///
/// Handed to [`SearchDomain::generate_successors`]; it cannot be built
/// outside the engine, so successors can only be added during an expansion.
pub struct Successors<'a, S> {
    arena: &'a mut NodeArena<S>,
    batch: &'a mut Vec<NodeId>,
    exhausted: bool,
}

impl<'a, S> Successors<'a, S> {
    pub(crate) fn new(arena: &'a mut NodeArena<S>, batch: &'a mut Vec<NodeId>) -> Self {
        Self {
            arena,
            batch,
            exhausted: false,
        }
    }

    /// Stage `state` as a successor of the node being expanded.
    ///
    /// Fails once the engine's node arena is full. The engine notices the
    /// failure on its own, so domains may simply stop adding and return.
    pub fn add_successor(&mut self, state: S) -> Result<(), SearchError> {
        match self.arena.allocate(state) {
            Ok(id) => {
                self.batch.push(id);
                Ok(())
            }
            Err(err) => {
                self.exhausted = true;
                Err(err)
            }
        }
    }

    /// Number of successors staged so far.
    /// Successors staged so far in this expansion.
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    /// Whether nothing has been staged yet.
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Whether an `add_successor` call hit the arena limit.
    pub(crate) fn arena_exhausted(&self) -> bool {
        self.exhausted
    }
}
