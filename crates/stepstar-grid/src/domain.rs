use log::warn;
use stepstar::{Cost, SearchDomain, Successors};

use crate::config::{CostModel, GridConfig, Movement};
use crate::error::GridError;
use crate::geom::Position;
use crate::pool::{StateId, StatePool};
use crate::terrain::TerrainGrid;

/// Terrain grid as a [`SearchDomain`].
///
/// Search states are [`StateId`] handles into the domain's own
/// [`StatePool`]. The pool must be cleared with [`reset`](Self::reset)
/// between searches; [`GridPathfinder`](crate::GridPathfinder) does this.
///
/// Heuristic estimates count steps and are scaled by the cheapest passable
/// cell, so they never exceed the true cost even on terrain with cost-0
/// cells.
#[derive(Debug, Clone)]
pub struct GridDomain {
    terrain: TerrainGrid,
    config: GridConfig,
    pool: StatePool,
    /// Lower bound on the cost of any single move.
    step_floor: Cost,
}

impl GridDomain {
    pub fn new(terrain: TerrainGrid, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let pool = StatePool::new(config.state_capacity, terrain.bounds());
        let step_floor = cheapest_step(&terrain, config.impassable);
        Ok(Self {
            terrain,
            config,
            pool,
            step_floor,
        })
    }

    #[inline]
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Change the cost of the cell at `p` between searches. Returns `false`
    /// outside the terrain.
    pub fn set_cost(&mut self, p: Position, cost: u8) -> bool {
        if !self.terrain.set(p, cost) {
            return false;
        }
        self.step_floor = cheapest_step(&self.terrain, self.config.impassable);
        true
    }

    /// Smallest cost a single move can have on the current terrain.
    #[inline]
    pub fn step_floor(&self) -> Cost {
        self.step_floor
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn pool(&self) -> &StatePool {
        &self.pool
    }

    /// Whether `p` is inside the terrain and below the impassable threshold.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.terrain.cost(p) < self.config.impassable
    }

    /// Search state for `p`, `None` if outside the terrain or the pool is
    /// full.
    pub fn state(&mut self, p: Position) -> Option<StateId> {
        self.pool.intern(p)
    }

    /// Position of a state handed out since the last reset.
    #[inline]
    pub fn position(&self, id: StateId) -> Position {
        self.pool.position(id)
    }

    /// Forget all states. Handles from earlier searches become invalid.
    pub fn reset(&mut self) {
        self.pool.clear();
    }

    fn push_neighbor(
        &mut self,
        n: Position,
        parent: Option<Position>,
        successors: &mut Successors<'_, StateId>,
    ) -> bool {
        if !self.is_passable(n) || parent == Some(n) {
            return true;
        }
        let Some(id) = self.pool.intern(n) else {
            warn!(
                "grid state pool exhausted ({} states)",
                self.pool.capacity()
            );
            return false;
        };
        // A full arena ends generation; the engine reports it.
        successors.add_successor(id).is_ok()
    }
}

fn cheapest_step(terrain: &TerrainGrid, impassable: u8) -> Cost {
    terrain
        .iter()
        .map(|(_, cost)| cost)
        .filter(|&cost| cost < impassable)
        .min()
        .map_or(0.0, Cost::from)
}

impl SearchDomain for GridDomain {
    type State = StateId;

    fn heuristic(&self, candidate: &StateId, goal: &StateId) -> Cost {
        let steps = self
            .config
            .heuristic
            .estimate(self.position(*candidate), self.position(*goal));
        steps * self.step_floor
    }

    fn is_goal(&self, candidate: &StateId, goal: &StateId) -> bool {
        self.states_equal(candidate, goal)
    }

    fn generate_successors(
        &mut self,
        current: &StateId,
        parent: Option<&StateId>,
        successors: &mut Successors<'_, StateId>,
    ) -> bool {
        let p = self.position(*current);
        let parent = parent.map(|id| self.position(*id));
        let movement = self.config.movement;
        match movement {
            Movement::Cardinal => p
                .neighbors_4()
                .into_iter()
                .all(|n| self.push_neighbor(n, parent, successors)),
            Movement::EightWay => p
                .neighbors_8()
                .into_iter()
                .all(|n| self.push_neighbor(n, parent, successors)),
        }
    }

    fn edge_cost(&self, from: &StateId, to: &StateId) -> Cost {
        let cell = match self.config.cost_model {
            CostModel::EnterTarget => self.position(*to),
            CostModel::LeaveSource => self.position(*from),
        };
        Cost::from(self.terrain.cost(cell))
    }

    fn states_equal(&self, a: &StateId, b: &StateId) -> bool {
        self.position(*a) == self.position(*b)
    }
}
