use std::fmt;

use log::debug;

use crate::arena::NodeArena;
use crate::closed::ClosedList;
use crate::config::SearchConfig;
use crate::domain::SearchDomain;
use crate::error::SearchError;
use crate::node::{Cost, Node, NodeId};
use crate::open::OpenList;

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Where a search is in its lifecycle.
///
/// `Searching` is the only state [`AStarSearch::step`] makes progress from.
/// Every other state is returned unchanged by further calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has been started on this engine.
    NotInitialized,
    /// The frontier still has work; call `step` again.
    Searching,
    /// The goal was reached and the solution can be walked.
    Succeeded,
    /// The frontier emptied, or the search was cancelled.
    Failed,
    /// The domain could not generate successors for lack of resources.
    OutOfMemory,
    /// The engine's own node arena ran out of slots.
    ArenaExhausted,
}

impl SearchState {
    /// Whether the search has finished, successfully or not.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::NotInitialized | Self::Searching)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotInitialized => "not initialized",
            Self::Searching => "searching",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::OutOfMemory => "out of memory",
            Self::ArenaExhausted => "arena exhausted",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// SearchStats
// ---------------------------------------------------------------------------

/// Diagnostic counters, for sizing [`SearchConfig`] capacities.
///
/// `steps` covers the current (or last) search; the high-water marks cover
/// the whole lifetime of the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Expansions performed by the current search.
    pub steps: usize,
    /// Largest open list seen.
    pub open_high_water: usize,
    /// Largest closed list seen.
    pub closed_high_water: usize,
    /// Most successors staged by a single expansion.
    pub successor_high_water: usize,
    /// Most arena nodes in use at once.
    pub nodes_high_water: usize,
}

// ---------------------------------------------------------------------------
// AStarSearch
// ---------------------------------------------------------------------------

/// Incremental A* search over states of type `S`.
///
/// The engine owns every piece of storage a search needs (node arena, open
/// and closed lists, successor batch), all sized from a [`SearchConfig`] at
/// construction and reused from one search to the next. A host drives it
/// one expansion at a time:
///
/// ```ignore
/// let mut search = AStarSearch::new(SearchConfig::default())?;
/// search.begin_search(&domain, start, goal);
/// while search.step(&mut domain) == SearchState::Searching {
///     // yield to the frame loop, or keep stepping
/// }
/// let path: Vec<_> = search.solution().cloned().collect();
/// search.release_nodes();
/// ```
pub struct AStarSearch<S> {
    pub(crate) config: SearchConfig,
    pub(crate) arena: NodeArena<S>,
    pub(crate) open: OpenList,
    pub(crate) closed: ClosedList,
    /// Successors staged by the domain during the current expansion.
    pub(crate) successors: Vec<NodeId>,
    pub(crate) successor_high_water: usize,
    pub(crate) state: SearchState,
    pub(crate) start: Option<NodeId>,
    pub(crate) goal: Option<NodeId>,
    /// Solution walk position for `solution_next` / `solution_prev`.
    pub(crate) cursor: Option<NodeId>,
    pub(crate) steps: usize,
    pub(crate) cancel_requested: bool,
}

impl<S: Clone> AStarSearch<S> {
    /// Create an engine with storage sized by `config`.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SearchConfig) -> Self {
        Self {
            config,
            arena: NodeArena::new(config.node_capacity),
            open: OpenList::with_capacity(config.open_capacity),
            closed: ClosedList::with_capacity(config.closed_capacity),
            successors: Vec::with_capacity(config.successor_capacity),
            successor_high_water: 0,
            state: SearchState::NotInitialized,
            start: None,
            goal: None,
            cursor: None,
            steps: 0,
            cancel_requested: false,
        }
    }

    /// Start a new search from `start` towards `goal`.
    ///
    /// Anything left from a previous search is released first. Returns
    /// [`SearchState::Searching`], or [`SearchState::ArenaExhausted`] if the
    /// arena cannot even hold the start and goal nodes.
    pub fn begin_search<D>(&mut self, domain: &D, start: S, goal: S) -> SearchState
    where
        D: SearchDomain<State = S>,
    {
        self.release_nodes();
        self.cancel_requested = false;
        self.steps = 0;

        let start_id = match self.arena.allocate(start) {
            Ok(id) => id,
            Err(_) => return self.finish(SearchState::ArenaExhausted),
        };
        let goal_id = match self.arena.allocate(goal) {
            Ok(id) => id,
            Err(_) => return self.finish(SearchState::ArenaExhausted),
        };

        let h = domain.heuristic(&self.arena[start_id].state, &self.arena[goal_id].state);
        let start_node = &mut self.arena[start_id];
        start_node.g = 0.0;
        start_node.h = h;
        start_node.parent = None;

        self.start = Some(start_id);
        self.goal = Some(goal_id);
        self.open.insert(start_id, &self.arena);
        self.state = SearchState::Searching;

        debug!(
            "search started: estimate {h}, node capacity {}",
            self.arena.capacity()
        );
        self.state
    }

    /// Ask the search to stop. Takes effect on the next [`step`](Self::step),
    /// which ends the search in [`SearchState::Failed`].
    pub fn cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Whether [`cancel`](Self::cancel) was called for the current search.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    /// Run up to `max_steps` expansions, stopping early once the search
    /// leaves [`SearchState::Searching`]. Lets a host cap the work done per
    /// frame.
    pub fn step_budget<D>(&mut self, domain: &mut D, max_steps: usize) -> SearchState
    where
        D: SearchDomain<State = S>,
    {
        for _ in 0..max_steps {
            if self.step(domain) != SearchState::Searching {
                break;
            }
        }
        self.state
    }

    /// Search from `start` to `goal` to completion and return the path,
    /// start and goal included.
    ///
    /// A blocking convenience over the stepping API. Nodes are released
    /// before returning, whatever the outcome.
    pub fn find_path<D>(&mut self, domain: &mut D, start: S, goal: S) -> Result<Vec<S>, SearchError>
    where
        D: SearchDomain<State = S>,
    {
        let mut state = self.begin_search(domain, start, goal);
        while state == SearchState::Searching {
            state = self.step(domain);
        }
        let result = match state {
            SearchState::Succeeded => Ok(self.solution().cloned().collect()),
            SearchState::OutOfMemory => Err(SearchError::OutOfMemory),
            SearchState::ArenaExhausted => Err(SearchError::ArenaExhausted {
                capacity: self.arena.capacity(),
            }),
            _ => Err(SearchError::NoPath),
        };
        self.release_nodes();
        result
    }

    // -----------------------------------------------------------------------
    // Solution access
    // -----------------------------------------------------------------------

    /// Move the solution cursor to the start and return its state.
    ///
    /// `None` unless the search has succeeded and the nodes have not been
    /// released yet.
    pub fn solution_start(&mut self) -> Option<&S> {
        let start = self.solved_endpoint(self.start)?;
        self.cursor = Some(start);
        Some(&self.arena[start].state)
    }

    /// Advance the cursor one node towards the goal.
    ///
    /// Returns `None` once the goal has been passed; the cursor then stays
    /// on the goal.
    pub fn solution_next(&mut self) -> Option<&S> {
        let next = self.arena.get(self.cursor?)?.child?;
        self.cursor = Some(next);
        Some(&self.arena[next].state)
    }

    /// Move the solution cursor to the goal and return its state.
    pub fn solution_end(&mut self) -> Option<&S> {
        let goal = self.solved_endpoint(self.goal)?;
        self.cursor = Some(goal);
        Some(&self.arena[goal].state)
    }

    /// Step the cursor one node back towards the start.
    pub fn solution_prev(&mut self) -> Option<&S> {
        let prev = self.arena.get(self.cursor?)?.parent?;
        self.cursor = Some(prev);
        Some(&self.arena[prev].state)
    }

    /// Iterate over the solution from start to goal without touching the
    /// cursor. Empty unless the search has succeeded.
    pub fn solution(&self) -> SolutionIter<'_, S> {
        SolutionIter {
            arena: &self.arena,
            next: self.solved_endpoint(self.start),
        }
    }

    /// Total cost of the solution path.
    pub fn solution_cost(&self) -> Option<Cost> {
        let goal = self.solved_endpoint(self.goal)?;
        Some(self.arena[goal].g)
    }

    fn solved_endpoint(&self, id: Option<NodeId>) -> Option<NodeId> {
        if self.state != SearchState::Succeeded {
            return None;
        }
        id
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Drop every node held by the engine: open, closed, staged successors
    /// and the solution. The engine is then ready for a new search.
    ///
    /// The [`state`](Self::state) is left as it was, so a host can still
    /// tell how the last search ended.
    pub fn release_nodes(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.successors.clear();
        self.arena.reset();
        self.start = None;
        self.goal = None;
        self.cursor = None;
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Current state of the search.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of expansions performed by the current search.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// The capacities this engine was built with.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes waiting on the frontier, cheapest first.
    pub fn open_nodes(&self) -> impl Iterator<Item = &Node<S>> + '_ {
        self.open.iter().map(move |id| &self.arena[id])
    }

    /// Nodes already expanded, in no particular order.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &Node<S>> + '_ {
        self.closed.iter().map(move |id| &self.arena[id])
    }

    /// Snapshot of the diagnostic counters.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            open_high_water: self.open.high_water(),
            closed_high_water: self.closed.high_water(),
            successor_high_water: self.successor_high_water,
            nodes_high_water: self.arena.high_water(),
        }
    }
}

impl<S: Clone> Default for AStarSearch<S> {
    fn default() -> Self {
        Self::with_valid_config(SearchConfig::default())
    }
}

/// Iterator over solution states, start first. See [`AStarSearch::solution`].
pub struct SolutionIter<'a, S> {
    arena: &'a NodeArena<S>,
    next: Option<NodeId>,
}

impl<'a, S> Iterator for SolutionIter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<&'a S> {
        let node = self.arena.get(self.next?)?;
        self.next = node.child;
        Some(&node.state)
    }
}
