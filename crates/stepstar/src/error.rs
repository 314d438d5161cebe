//! Error types for the search engine.
//!
//! Runtime outcomes of a search are reported as terminal
//! [`SearchState`](crate::SearchState) values from [`step`](crate::AStarSearch::step).
//! [`SearchError`] is what the fallible helpers around the state machine
//! return: arena allocation, configuration validation and the blocking
//! [`find_path`](crate::AStarSearch::find_path) convenience.

use std::fmt;

/// Errors produced by the engine's fallible operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The node arena has no free slot left.
    ///
    /// This is a configuration problem: the arena was sized too small for
    /// the problem being searched.
    ArenaExhausted {
        /// Configured number of node slots.
        capacity: usize,
    },
    /// The frontier ran dry (or the search was cancelled) before the goal
    /// was reached.
    NoPath,
    /// The domain reported that it ran out of its own resources while
    /// generating successors.
    OutOfMemory,
    /// A [`SearchConfig`](crate::SearchConfig) value was rejected.
    InvalidConfig {
        /// What was wrong with it.
        detail: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArenaExhausted { capacity } => {
                write!(f, "node arena exhausted: all {capacity} slots in use")
            }
            Self::NoPath => write!(f, "no path to the goal"),
            Self::OutOfMemory => write!(f, "domain ran out of memory while expanding a node"),
            Self::InvalidConfig { detail } => write!(f, "invalid search config: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
