//! Terrain-grid domain for the [`stepstar`] A* engine.
//!
//! A [`TerrainGrid`] holds a movement cost per cell. [`GridDomain`] turns it
//! into a [`stepstar::SearchDomain`] whose states are handles into a
//! fixed-capacity [`StatePool`], and [`GridPathfinder`] pairs the domain
//! with an engine behind a position-based API.
//!
//! Behaviour is set through [`GridConfig`]:
//!
//! | Setting | Options |
//! |---|---|
//! | [`Movement`] | cardinal, eight-way |
//! | [`Heuristic`] | Manhattan, Euclidean, Chebyshev, zero |
//! | [`CostModel`] | price of the entered cell, price of the left cell |

mod config;
mod distance;
mod domain;
mod error;
mod geom;
mod pathfinder;
mod pool;
mod terrain;

pub use config::{CostModel, GridConfig, Movement};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan};
pub use domain::GridDomain;
pub use error::GridError;
pub use geom::{Bounds, Position};
pub use pathfinder::GridPathfinder;
pub use pool::{StateId, StatePool};
pub use terrain::{TerrainError, TerrainGrid};
