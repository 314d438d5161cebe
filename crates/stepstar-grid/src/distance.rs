use stepstar::Cost;

use crate::geom::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> Cost {
    let dx = (a.x - b.x) as Cost;
    let dy = (a.y - b.y) as Cost;
    (dx * dx + dy * dy).sqrt()
}

/// Distance estimate used as the A* heuristic.
///
/// The estimates count steps; [`GridDomain`](crate::GridDomain) scales them
/// by the cheapest passable cell. `Manhattan` and `Euclidean` overestimate
/// under eight-way movement, and [`GridConfig::validate`](crate::GridConfig::validate)
/// rejects those pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    /// Always 0; the search degenerates to Dijkstra.
    Zero,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Position, to: Position) -> Cost {
        match self {
            Self::Manhattan => manhattan(from, to) as Cost,
            Self::Euclidean => euclidean(from, to),
            Self::Chebyshev => chebyshev(from, to) as Cost,
            Self::Zero => 0.0,
        }
    }
}
