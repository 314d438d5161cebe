//! Fixed-capacity pool of grid search states.
//!
//! The engine stores [`StateId`] handles; the positions they stand for live
//! here. A position is interned once per search, so asking for the same
//! cell twice returns the same handle. Storage is reserved at construction
//! and [`StatePool::clear`] keeps it.

use crate::geom::{Bounds, Position};

/// Handle to a position stored in a [`StatePool`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position interner with a hard capacity.
#[derive(Debug, Clone)]
pub struct StatePool {
    positions: Vec<Position>,
    // Handle per cell of `bounds`, `None` if not interned this search.
    by_cell: Vec<Option<StateId>>,
    bounds: Bounds,
    capacity: usize,
}

impl StatePool {
    /// A pool of `capacity` states for positions inside `bounds`.
    pub fn new(capacity: usize, bounds: Bounds) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            by_cell: vec![None; bounds.len()],
            bounds,
            capacity,
        }
    }

    /// Handle for `p`, interning it if needed.
    ///
    /// `None` if `p` is outside the pool's bounds or the pool is full.
    pub fn intern(&mut self, p: Position) -> Option<StateId> {
        let cell = self.bounds.index(p)?;
        if let Some(id) = self.by_cell[cell] {
            return Some(id);
        }
        if self.positions.len() >= self.capacity {
            return None;
        }
        let id = StateId(u32::try_from(self.positions.len()).ok()?);
        self.positions.push(p);
        self.by_cell[cell] = Some(id);
        Some(id)
    }

    /// Position behind `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not handed out since the last [`clear`](Self::clear).
    #[inline]
    pub fn position(&self, id: StateId) -> Position {
        self.positions[id.index()]
    }

    /// Forget every interned position.
    pub fn clear(&mut self) {
        for p in self.positions.drain(..) {
            if let Some(cell) = self.bounds.index(p) {
                self.by_cell[cell] = None;
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
