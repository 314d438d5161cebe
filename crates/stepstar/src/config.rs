//! Engine capacity configuration.

use crate::error::SearchError;

/// Capacities for the engine's preallocated storage.
///
/// Every collection the engine touches during a search is reserved up front
/// from these numbers, so a search that stays within them never allocates.
/// Only `node_capacity` is a hard limit; the list capacities are reservation
/// hints that the lists may outgrow (at the price of a reallocation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of node slots in the arena. Exceeding it ends the search in
    /// [`SearchState::ArenaExhausted`](crate::SearchState::ArenaExhausted).
    pub node_capacity: usize,
    /// Slots reserved for the open list.
    pub open_capacity: usize,
    /// Slots reserved for the closed list.
    pub closed_capacity: usize,
    /// Slots reserved for the successors staged during one expansion.
    pub successor_capacity: usize,
}

impl SearchConfig {
    /// Default number of arena nodes.
    pub const DEFAULT_NODE_CAPACITY: usize = 4000;

    /// Default open list reservation. Searches on larger maps grow the list
    /// on first use; size it to the map to avoid that.
    pub const DEFAULT_OPEN_CAPACITY: usize = 32;

    /// Default closed list reservation.
    pub const DEFAULT_CLOSED_CAPACITY: usize = 256;

    /// Default successor batch reservation (eight-way grids need 8).
    pub const DEFAULT_SUCCESSOR_CAPACITY: usize = 8;

    /// Create a config with the given arena size and default list sizes.
    pub fn new(node_capacity: usize) -> Self {
        Self {
            node_capacity,
            ..Self::default()
        }
    }

    /// Set the open list reservation.
    pub fn with_open_capacity(mut self, open_capacity: usize) -> Self {
        self.open_capacity = open_capacity;
        self
    }

    /// Set the closed list reservation.
    pub fn with_closed_capacity(mut self, closed_capacity: usize) -> Self {
        self.closed_capacity = closed_capacity;
        self
    }

    /// Set the successor batch reservation.
    pub fn with_successor_capacity(mut self, successor_capacity: usize) -> Self {
        self.successor_capacity = successor_capacity;
        self
    }

    /// Check that the configuration can run at least a trivial search.
    ///
    /// A search needs two nodes (start and goal) before it expands anything.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.node_capacity < 2 {
            return Err(SearchError::InvalidConfig {
                detail: format!(
                    "node_capacity must be at least 2 (start and goal), got {}",
                    self.node_capacity
                ),
            });
        }
        if u32::try_from(self.node_capacity).is_err() {
            return Err(SearchError::InvalidConfig {
                detail: format!("node_capacity {} does not fit a u32 index", self.node_capacity),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_capacity: Self::DEFAULT_NODE_CAPACITY,
            open_capacity: Self::DEFAULT_OPEN_CAPACITY,
            closed_capacity: Self::DEFAULT_CLOSED_CAPACITY,
            successor_capacity: Self::DEFAULT_SUCCESSOR_CAPACITY,
        }
    }
}
