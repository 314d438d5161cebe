//! Shared pieces of the demo hosts.
//!
//! Demonstrates: stepping a search under a per-frame budget, the 20x20
//! terrain map, inspecting the open and closed lists between steps, and a
//! non-grid domain (the Romania road map).

use std::fmt;

use stepstar::SearchState;
use stepstar_grid::{Position, TerrainError, TerrainGrid};

pub mod romania;

pub const MAP_WIDTH: i32 = 20;
pub const MAP_HEIGHT: i32 = 20;

/// The demo terrain. `1` is open ground, `9` is a wall.
pub const DEMO_MAP: [&str; MAP_HEIGHT as usize] = [
    "11111111111111111111", // 00
    "19999999999999999991", // 01
    "19911999191919199911", // 02
    "19911999191919199911", // 03
    "19111199191911119911", // 04
    "19119111191111911111", // 05
    "19999111111999911111", // 06
    "19999999911199999991", // 07
    "19111111111911111111", // 08
    "19199999991199999991", // 09
    "19111191191111111111", // 10
    "19999919191999991111", // 11
    "19191999191919199911", // 12
    "19191999191919199911", // 13
    "19111199191911119911", // 14
    "19119111191111911111", // 15
    "19999111111999911111", // 16
    "11999999911199919999", // 17
    "19111111111911111111", // 18
    "11111111111111111111", // 19
];

/// Parse [`DEMO_MAP`].
pub fn demo_terrain() -> Result<TerrainGrid, TerrainError> {
    TerrainGrid::from_rows(&DEMO_MAP)
}

// ---------------------------------------------------------------------------
// Path display
// ---------------------------------------------------------------------------

/// A found path, printed as `Node 0: x, y - Node 1: x, y - ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDisplay(pub Vec<Position>);

impl fmt::Display for PathDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "Node {i}: {}, {}", p.x, p.y)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FrameBudget
// ---------------------------------------------------------------------------

/// Spreads a search over "frames" of at most `steps_per_frame` expansions,
/// the way a game loop would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBudget {
    pub steps_per_frame: usize,
    /// Frames to give the search before giving up on it.
    pub max_frames: usize,
}

/// Outcome of [`FrameBudget::drive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frames: usize,
    pub state: SearchState,
}

impl Default for FrameBudget {
    fn default() -> Self {
        Self {
            steps_per_frame: 16,
            max_frames: 1000,
        }
    }
}

impl FrameBudget {
    /// Call `step_budget` once per frame until the search leaves
    /// `Searching` or the frames run out. In the latter case the reported
    /// state is still `Searching` and the caller decides what to do.
    pub fn drive(&self, mut step_budget: impl FnMut(usize) -> SearchState) -> FrameReport {
        let mut state = SearchState::Searching;
        let mut frames = 0;
        while state == SearchState::Searching && frames < self.max_frames {
            state = step_budget(self.steps_per_frame);
            frames += 1;
            log::trace!("frame {frames}: {state}");
        }
        FrameReport { frames, state }
    }
}
