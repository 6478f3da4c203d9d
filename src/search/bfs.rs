// ABOUTME: Plain breadth-first search: the arena itself is the FIFO queue

use super::expand::{self, Expansion};
use super::reconstruct_path;
use crate::bitset;
use crate::context::Context;
use crate::position::Direction;
use crate::problem::Problem;
use crate::result::SolveResult;
use crate::state::StateNode;

impl Context {
    /// Breadth-first search: optimal in move count. Returns immediately
    /// with `solved: false, limit_exceeded: false` if `problem` never
    /// passed a successful `parse` (or parsed to an unsolvable layout).
    pub fn solve_bfs(&mut self, problem: &Problem, max_iterations: u64) -> SolveResult {
        if !problem.potentially_solvable {
            return SolveResult::unsolved(0, 0);
        }
        self.reset();

        let root_bits = match self.alloc_bitset_copy(&problem.crates_initial) {
            Some(id) => id,
            None => return SolveResult::limit_exceeded(0, 0),
        };
        let root = StateNode {
            parent: None,
            action: None,
            player: problem.player_initial,
            crates: root_bits,
            cost: 0,
            heuristic: 0,
            priority: 0,
            heap_index: -1,
        };
        let root_id = match self.push_state(root) {
            Some(id) => id,
            None => return SolveResult::limit_exceeded(0, 0),
        };
        self.table_insert(root_id);

        let mut current = 0usize;
        let mut iterations: u64 = 0;
        let mut nodes_expanded: u64 = 0;

        while current < self.states_len() {
            if max_iterations > 0 && iterations >= max_iterations {
                return SolveResult::limit_exceeded(iterations, nodes_expanded);
            }
            iterations += 1;

            let parent_player = self.state_player(current);
            let parent_cost = self.state_cost(current);
            let parent_crates_id = self.state_crates(current);
            self.load_scratch(parent_crates_id);
            let current_id = self.state_id_at(current);

            for direction in Direction::ALL {
                let step = match expand::expand(problem, self.width(), parent_player, self.scratch(), direction) {
                    Some(step) => step,
                    None => continue,
                };
                nodes_expanded += 1;

                let (child_player, action, pushed, from, to) = match step {
                    Expansion::Move { player, action } => (player, action, false, 0, 0),
                    Expansion::Push { player, from, to, action } => (player, action, true, from, to),
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
                    parent_crates_id
                };

                if pushed && bitset::equals(self.bitset(child_crates_id), &problem.goals) {
                    let actions = reconstruct_path(self.states_ref(), current_id, action);
                    return SolveResult::solved(actions, iterations, nodes_expanded);
                }

                if self
                    .table_lookup(child_player, self.bitset(child_crates_id))
                    .is_some()
                {
                    if pushed {
                        self.rollback_bitset();
                    }
                    continue;
                }

                let child = StateNode {
                    parent: Some(current_id),
                    action: Some(action),
                    player: child_player,
                    crates: child_crates_id,
                    cost: parent_cost + 1,
                    heuristic: 0,
                    priority: 0,
                    heap_index: -1,
                };
                let child_id = match self.push_state(child) {
                    Some(id) => id,
                    None => return SolveResult::limit_exceeded(iterations, nodes_expanded),
                };
                self.table_insert(child_id);
            }

            current += 1;
        }

        SolveResult::unsolved(iterations, nodes_expanded)
    }
}

