//! Incremental A* search for real-time hosts.
//!
//! A search runs one expansion per [`AStarSearch::step`] call, so a game
//! loop or simulation can spread a long search over many frames and stop
//! it at any point. All storage the engine uses is sized up front by a
//! [`SearchConfig`] and reused across searches:
//!
//! - a fixed-capacity [`NodeArena`] holding every search node,
//! - the [`OpenList`] frontier ordered by `f = g + h`,
//! - the [`ClosedList`] of expanded nodes.
//!
//! The problem itself is supplied through the [`SearchDomain`] trait:
//! heuristic, goal test, successor generation, edge cost and state
//! equality. The engine treats states as opaque values.
//!
//! # Lifecycle
//!
//! | Call | Effect |
//! |---|---|
//! | [`AStarSearch::begin_search`] | seed the frontier, enter `Searching` |
//! | [`AStarSearch::step`] | expand one node |
//! | [`AStarSearch::solution_start`] / [`AStarSearch::solution_next`] | walk a found path |
//! | [`AStarSearch::release_nodes`] | return every node to the arena |
//!
//! Arena exhaustion, a domain running out of its own resources, and an
//! unreachable goal are reported as terminal [`SearchState`]s, never as
//! panics.

mod arena;
mod closed;
mod config;
mod domain;
mod error;
mod node;
mod open;
mod search;
mod step;

#[cfg(test)]
mod testing;

pub use arena::NodeArena;
pub use closed::ClosedList;
pub use config::SearchConfig;
pub use domain::{SearchDomain, Successors};
pub use error::SearchError;
pub use node::{Cost, Node, NodeId};
pub use open::OpenList;
pub use search::{AStarSearch, SearchState, SearchStats, SolutionIter};
