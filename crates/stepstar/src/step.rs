use log::{debug, trace, warn};

use crate::domain::{SearchDomain, Successors};
use crate::node::NodeId;
use crate::search::{AStarSearch, SearchState};

impl<S: Clone> AStarSearch<S> {
    /// Perform one expansion.
    ///
    /// Pops the cheapest open node; if it satisfies the goal the solution is
    /// linked up and the search succeeds, otherwise its successors are
    /// generated, relaxed against the open and closed lists, and the node is
    /// closed. Returns the resulting state. Outside of
    /// [`SearchState::Searching`] this is a no-op.
    pub fn step<D>(&mut self, domain: &mut D) -> SearchState
    where
        D: SearchDomain<State = S>,
    {
        if self.state != SearchState::Searching {
            return self.state;
        }

        if self.cancel_requested {
            debug!("search cancelled after {} steps", self.steps);
            return self.finish(SearchState::Failed);
        }

        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return self.finish(SearchState::Failed);
        };

        let Some(n) = self.open.pop_min() else {
            debug!("frontier exhausted after {} steps, no path", self.steps);
            return self.finish(SearchState::Failed);
        };

        self.steps += 1;

        if domain.is_goal(&self.arena[n].state, &self.arena[goal].state) {
            // The caller's goal node stands in for `n` on the solution path.
            self.arena[goal].parent = self.arena[n].parent;
            self.arena[goal].g = self.arena[n].g;
            if n != start {
                self.link_solution(start, goal);
            }
            self.state = SearchState::Succeeded;
            debug!(
                "goal reached: steps {}, cost {}, nodes {}; high water open {} closed {} successors {}",
                self.steps,
                self.arena[goal].g,
                self.arena.len(),
                self.open.high_water(),
                self.closed.high_water(),
                self.successor_high_water,
            );
            return self.state;
        }

        // Generate successors.
        self.successors.clear();
        let current = self.arena[n].state.clone();
        let parent = self.arena[n].parent.map(|p| self.arena[p].state.clone());
        let mut staged = Successors::new(&mut self.arena, &mut self.successors);
        let generated = domain.generate_successors(&current, parent.as_ref(), &mut staged);
        let arena_exhausted = staged.arena_exhausted();
        self.successor_high_water = self.successor_high_water.max(self.successors.len());

        if arena_exhausted {
            return self.finish(SearchState::ArenaExhausted);
        }
        if !generated {
            return self.finish(SearchState::OutOfMemory);
        }

        let n_g = self.arena[n].g;
        for i in 0..self.successors.len() {
            let s = self.successors[i];
            let new_g = n_g + domain.edge_cost(&self.arena[n].state, &self.arena[s].state);

            let on_open = self
                .open
                .find_by_state(&self.arena, &self.arena[s].state, |a, b| domain.states_equal(a, b));
            if let Some(o) = on_open {
                if self.arena[o].g <= new_g {
                    continue;
                }
            }

            let on_closed = self
                .closed
                .find_by_state(&self.arena, &self.arena[s].state, |a, b| domain.states_equal(a, b));
            if let Some(c) = on_closed {
                if self.arena[c].g <= new_g {
                    continue;
                }
            }

            // Best path to this state so far.
            let h = domain.heuristic(&self.arena[s].state, &self.arena[goal].state);
            let node = &mut self.arena[s];
            node.parent = Some(n);
            node.g = new_g;
            node.h = h;

            if let Some(c) = on_closed {
                self.closed.remove(c);
            }
            if let Some(o) = on_open {
                self.open.remove(o);
            }
            self.open.insert(s, &self.arena);
        }

        self.closed.insert(n);

        trace!(
            "step {}: open {} closed {} nodes {}",
            self.steps,
            self.open.len(),
            self.closed.len(),
            self.arena.len()
        );
        self.state
    }

    /// Write `child` links from `goal` back to `start`.
    fn link_solution(&mut self, start: NodeId, goal: NodeId) {
        let mut child = goal;
        while child != start {
            let Some(parent) = self.arena[child].parent else {
                break;
            };
            self.arena[parent].child = Some(child);
            child = parent;
        }
    }

    /// Enter a terminal state, releasing nodes unless the search succeeded.
    pub(crate) fn finish(&mut self, outcome: SearchState) -> SearchState {
        match outcome {
            SearchState::OutOfMemory => {
                warn!("domain ran out of memory after {} steps", self.steps);
            }
            SearchState::ArenaExhausted => {
                warn!(
                    "node arena exhausted ({} slots) after {} steps",
                    self.arena.capacity(),
                    self.steps
                );
            }
            _ => {}
        }
        if outcome != SearchState::Succeeded {
            self.release_nodes();
        }
        self.state = outcome;
        outcome
    }
}
