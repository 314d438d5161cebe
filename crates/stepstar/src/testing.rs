//! Small domains shared by the engine's unit tests.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::{SearchDomain, Successors};
use crate::node::Cost;

/// Directed graph over `0..n` with per-node heuristic estimates.
pub(crate) struct Graph {
    edges: Vec<Vec<(usize, Cost)>>,
    estimates: Vec<Cost>,
}

impl Graph {
    /// `n` nodes, no edges, all estimates zero.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            edges: vec![Vec::new(); n],
            estimates: vec![0.0; n],
        }
    }

    /// `0 - 1 - ... - n-1`, unit cost both ways.
    pub(crate) fn chain(n: usize) -> Self {
        let mut graph = Self::new(n);
        for i in 1..n {
            graph.edge(i - 1, i, 1.0);
            graph.edge(i, i - 1, 1.0);
        }
        graph
    }

    pub(crate) fn edge(&mut self, from: usize, to: usize, cost: Cost) {
        self.edges[from].push((to, cost));
    }

    /// Estimate for `node`, whatever the goal.
    pub(crate) fn set_heuristic(&mut self, node: usize, estimate: Cost) {
        self.estimates[node] = estimate;
    }
}

impl SearchDomain for Graph {
    type State = usize;

    fn heuristic(&self, candidate: &usize, _goal: &usize) -> Cost {
        self.estimates[*candidate]
    }

    fn is_goal(&self, candidate: &usize, goal: &usize) -> bool {
        candidate == goal
    }

    fn generate_successors(
        &mut self,
        current: &usize,
        parent: Option<&usize>,
        successors: &mut Successors<'_, usize>,
    ) -> bool {
        for &(to, _) in &self.edges[*current] {
            if Some(&to) == parent {
                continue;
            }
            if successors.add_successor(to).is_err() {
                break;
            }
        }
        true
    }

    fn edge_cost(&self, from: &usize, to: &usize) -> Cost {
        self.edges[*from]
            .iter()
            .find(|(t, _)| t == to)
            .map_or(Cost::INFINITY, |&(_, c)| c)
    }

    fn states_equal(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}

/// A domain that never has memory for successors.
pub(crate) struct RefusingDomain;

impl SearchDomain for RefusingDomain {
    type State = usize;

    fn heuristic(&self, _: &usize, _: &usize) -> Cost {
        0.0
    }

    fn is_goal(&self, candidate: &usize, goal: &usize) -> bool {
        candidate == goal
    }

    fn generate_successors(
        &mut self,
        _: &usize,
        _: Option<&usize>,
        _: &mut Successors<'_, usize>,
    ) -> bool {
        false
    }

    fn edge_cost(&self, _: &usize, _: &usize) -> Cost {
        1.0
    }

    fn states_equal(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}

/// Row-major grid of cell costs; `9` is a wall. Entering a cell costs its
/// value, moves are cardinal only.
pub(crate) struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

const WALL: u8 = 9;

impl GridWorld {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<u8>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Every cell costs 1.
    pub(crate) fn open(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![1; width * height])
    }

    /// One digit per cell.
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.bytes().map(|b| b - b'0'))
            .collect();
        Self::new(width, rows.len(), cells)
    }

    pub(crate) fn id(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn xy(&self, id: usize) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Cardinal neighbours that are not walls, in engine order.
    fn neighbours(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = self.xy(id);
        [(-1, 0), (0, -1), (1, 0), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy): (isize, isize)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < self.width && ny < self.height).then(|| self.id(nx, ny))
            })
            .filter(move |&n| self.cells[n] != WALL)
    }

    pub(crate) fn adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbours(a).any(|n| n == b)
    }
}

impl SearchDomain for GridWorld {
    type State = usize;

    fn heuristic(&self, candidate: &usize, goal: &usize) -> Cost {
        let (cx, cy) = self.xy(*candidate);
        let (gx, gy) = self.xy(*goal);
        (cx.abs_diff(gx) + cy.abs_diff(gy)) as Cost
    }

    fn is_goal(&self, candidate: &usize, goal: &usize) -> bool {
        candidate == goal
    }

    fn generate_successors(
        &mut self,
        current: &usize,
        parent: Option<&usize>,
        successors: &mut Successors<'_, usize>,
    ) -> bool {
        for n in self.neighbours(*current) {
            if Some(&n) == parent {
                continue;
            }
            if successors.add_successor(n).is_err() {
                break;
            }
        }
        true
    }

    fn edge_cost(&self, _from: &usize, to: &usize) -> Cost {
        Cost::from(self.cells[*to])
    }

    fn states_equal(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}

#[derive(PartialEq)]
struct Entry(Cost, usize);

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reference shortest path cost on `world`, or `None` if unreachable.
pub(crate) fn dijkstra_cost(world: &GridWorld, start: usize, goal: usize) -> Option<Cost> {
    let mut dist = vec![Cost::INFINITY; world.cells.len()];
    let mut heap = BinaryHeap::new();
    dist[start] = 0.0;
    heap.push(Entry(0.0, start));
    while let Some(Entry(d, at)) = heap.pop() {
        if at == goal {
            return Some(d);
        }
        if d > dist[at] {
            continue;
        }
        for n in world.neighbours(at) {
            let nd = d + world.edge_cost(&at, &n);
            if nd < dist[n] {
                dist[n] = nd;
                heap.push(Entry(nd, n));
            }
        }
    }
    None
}
