//! Grid domain configuration.

use crate::distance::Heuristic;
use crate::error::GridError;

/// Which neighbours a cell has.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Left, up, right, down.
    #[default]
    Cardinal,
    /// Cardinal moves plus diagonals, all at the same cell cost.
    EightWay,
}

/// Which cell's terrain value prices a move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    /// A move costs the value of the cell being entered.
    #[default]
    EnterTarget,
    /// A move costs the value of the cell being left.
    LeaveSource,
}

/// Settings for a [`GridDomain`](crate::GridDomain).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub movement: Movement,
    pub heuristic: Heuristic,
    pub cost_model: CostModel,
    /// Size of the state pool; running out ends a search in
    /// [`SearchState::OutOfMemory`](stepstar::SearchState::OutOfMemory).
    pub state_capacity: usize,
    /// Cells with a value at or above this cannot be entered.
    pub impassable: u8,
}

impl GridConfig {
    /// Default state pool size.
    pub const DEFAULT_STATE_CAPACITY: usize = 1000;

    /// Default impassable terrain value.
    pub const DEFAULT_IMPASSABLE: u8 = 9;

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn with_state_capacity(mut self, state_capacity: usize) -> Self {
        self.state_capacity = state_capacity;
        self
    }

    pub fn with_impassable(mut self, impassable: u8) -> Self {
        self.impassable = impassable;
        self
    }

    /// Reject settings no search could run with, and heuristics that would
    /// overestimate under the chosen movement.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.state_capacity < 2 {
            return Err(GridError::InvalidConfig {
                detail: format!(
                    "state_capacity must be at least 2 (start and goal), got {}",
                    self.state_capacity
                ),
            });
        }
        if self.impassable == 0 {
            return Err(GridError::InvalidConfig {
                detail: "impassable threshold 0 blocks every cell".to_string(),
            });
        }
        // A diagonal move is one step; only Chebyshev and Zero count it so.
        if self.movement == Movement::EightWay
            && matches!(self.heuristic, Heuristic::Manhattan | Heuristic::Euclidean)
        {
            return Err(GridError::InvalidConfig {
                detail: format!(
                    "{:?} overestimates eight-way moves; use Chebyshev or Zero",
                    self.heuristic
                ),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            movement: Movement::default(),
            heuristic: Heuristic::default(),
            cost_model: CostModel::default(),
            state_capacity: Self::DEFAULT_STATE_CAPACITY,
            impassable: Self::DEFAULT_IMPASSABLE,
        }
    }
}
