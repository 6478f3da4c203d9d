// ABOUTME: Weighted best-first / A* search over the context's min-heap

use super::expand::{self, Expansion};
use super::reconstruct_path;
use crate::bitset;
use crate::context::Context;
use crate::position::Direction;
use crate::problem::Problem;
use crate::result::SolveResult;
use crate::state::StateNode;

/// The three `(g_factor, h_factor)` presets named in the spec.
///
/// `solve_astar` itself takes the raw factors; this enum is a convenience
/// wrapper over the same entry point, not a distinct search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstarStrategy {
    /// `g=1, h=0`: uniform-cost, equivalent to BFS in cost-optimality with
    /// different tiebreaks.
    Uniform,
    /// `g=1, h=1`: classic A*, optimal given an admissible heuristic.
    AStar,
    /// `g=0, h=1`: greedy best-first. Fast, but not cost-optimal.
    Greedy,
}

impl AstarStrategy {
    /// Returns `(h_factor, g_factor)` for [`Context::solve_astar`].
    #[must_use]
    pub fn factors(self) -> (u32, u32) {
        match self {
            AstarStrategy::Uniform => (0, 1),
            AstarStrategy::AStar => (1, 1),
            AstarStrategy::Greedy => (1, 0),
        }
    }
}

impl Context {
    /// Weighted best-first search: `priority = h_factor * heuristic +
    /// g_factor * cost`. The goal test happens at child-generation time,
    /// valid because every move costs 1 (so `child.cost == parent.cost +
    /// 1` always holds and the heuristic stays consistent).
    pub fn solve_astar(
        &mut self,
        problem: &Problem,
        h_factor: u32,
        g_factor: u32,
        max_iterations: u64,
    ) -> SolveResult {
        if !problem.potentially_solvable {
            return SolveResult::unsolved(0, 0);
        }
        self.reset();

        let root_bits = match self.alloc_bitset_copy(&problem.crates_initial) {
            Some(id) => id,
            None => return SolveResult::limit_exceeded(0, 0),
        };
        let root_heuristic = problem.heuristic_sum(self.bitset(root_bits));
        let root = StateNode {
            parent: None,
            action: None,
            player: problem.player_initial,
            crates: root_bits,
            cost: 0,
            heuristic: root_heuristic,
            priority: h_factor * root_heuristic,
            heap_index: -1,
        };
        let root_id = match self.push_state(root) {
            Some(id) => id,
            None => return SolveResult::limit_exceeded(0, 0),
        };
        self.table_insert(root_id);
        self.heap_insert(root_id);

        let mut iterations: u64 = 0;
        let mut nodes_expanded: u64 = 0;

        loop {
            if max_iterations > 0 && iterations >= max_iterations {
                return SolveResult::limit_exceeded(iterations, nodes_expanded);
            }
            let current_id = match self.heap_pop() {
                Some(id) => id,
                None => return SolveResult::unsolved(iterations, nodes_expanded),
            };
            iterations += 1;

            let parent = *self.state(current_id);
            self.load_scratch(parent.crates);

            for direction in Direction::ALL {
                let step = match expand::expand(
                    problem,
                    self.width(),
                    parent.player,
                    self.scratch(),
                    direction,
                ) {
                    Some(step) => step,
                    None => continue,
                };
                nodes_expanded += 1;

                let (child_player, action, pushed, from, to) = match step {
                    Expansion::Move { player, action } => (player, action, false, 0, 0),
                    Expansion::Push {
                        player,
                        from,
                        to,
                        action,
                    } => (player, action, true, from, to),
                };

                let child_crates_id = if pushed {
                    match self.alloc_bitset_from_scratch() {
                        Some(id) => {
                            let slot = self.bitset_mut(id);
                            bitset::set(slot, to);
                            bitset::clear(slot, from);
                            id
                        }
                        None => return SolveResult::limit_exceeded(iterations, nodes_expanded),
                    }
                } else {
                    parent.crates
                };

                if pushed && bitset::equals(self.bitset(child_crates_id), &problem.goals) {
                    let actions = reconstruct_path(self.states_ref(), current_id, action);
                    return SolveResult::solved(actions, iterations, nodes_expanded);
                }

                let child_cost = parent.cost + 1;

                match self.table_lookup(child_player, self.bitset(child_crates_id)) {
                    None => {
                        let heuristic = if pushed {
                            problem.heuristic_sum(self.bitset(child_crates_id))
                        } else {
                            parent.heuristic
                        };
                        let priority = g_factor * child_cost as u32 + h_factor * heuristic;
                        let child = StateNode {
                            parent: Some(current_id),
                            action: Some(action),
                            player: child_player,
                            crates: child_crates_id,
                            cost: child_cost,
                            heuristic,
                            priority,
                            heap_index: -1,
                        };
                        let child_id = match self.push_state(child) {
                            Some(id) => id,
                            None => {
                                return SolveResult::limit_exceeded(iterations, nodes_expanded)
                            }
                        };
                        self.table_insert(child_id);
                        self.heap_insert(child_id);
                    }
                    Some(twin_id) => {
                        if pushed {
                            self.rollback_bitset();
                        }
                        let twin = *self.state(twin_id);
                        if twin.heap_index >= 0 && twin.cost > child_cost {
                            let priority = g_factor * child_cost as u32 + h_factor * twin.heuristic;
                            let node = self.state_mut(twin_id);
                            node.parent = Some(current_id);
                            node.action = Some(action);
                            node.cost = child_cost;
                            node.priority = priority;
                            self.heap_decrease_key(twin_id);
                        }
                    }
                }
            }
        }
    }
}
