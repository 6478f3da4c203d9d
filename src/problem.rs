// ABOUTME: Puzzle instance: walls/goals/crates, parsing and solution replay

use crate::bitset;
use crate::deadlock;
use crate::position::{apply_delta, Direction, Pos};
use crate::tile::Tile;

/// A single puzzle bound to one [`crate::Context`]'s padded dimensions.
///
/// Re-parseable any number of times: `parse` always resets every buffer to
/// its "nothing parsed yet" state first, so parsing the same `Problem`
/// twice with the same text is idempotent.
pub struct Problem {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) area: usize,
    pub(crate) walls: Vec<u64>,
    pub(crate) goals: Vec<u64>,
    pub(crate) crates_initial: Vec<u64>,
    pub(crate) deadlocks: Vec<u64>,
    pub(crate) heuristics: Vec<u16>,
    pub(crate) player_initial: Pos,
    pub goal_count: u16,
    pub crate_count: u16,
    pub compilable: bool,
    pub potentially_solvable: bool,
}

impl Problem {
    pub(crate) fn fresh(width: u16, height: u16, area: usize, bitset_size: usize) -> Self {
        let mut walls = vec![0u64; bitset_size];
        bitset::fill_ones(&mut walls, area);
        Problem {
            width,
            height,
            area,
            walls,
            goals: vec![0u64; bitset_size],
            crates_initial: vec![0u64; bitset_size],
            deadlocks: vec![0u64; bitset_size],
            heuristics: vec![area as u16; area],
            player_initial: 0,
            goal_count: 0,
            crate_count: 0,
            compilable: false,
            potentially_solvable: false,
        }
    }

    /// Tokenizes `text` into this problem's buffers and runs the
    /// compilability / potential-solvability analysis. Returns
    /// `compilable`.
    ///
    /// Grammar (see [`Tile::from_char`]): cells are filled left-to-right,
    /// top-to-bottom over the interior `(width-2) x (height-2)` region; an
    /// unrecognized character is skipped without consuming a cell, and a
    /// NUL byte or running out of interior cells stops tokenizing early.
    pub fn parse(&mut self, text: &str) -> bool {
        self.reset_buffers();

        let interior_w = self.width as usize - 2;
        let interior_h = self.height as usize - 2;
        let interior_cells = interior_w * interior_h;

        let mut player_count: u32 = 0;
        let mut goal_count: u32 = 0;
        let mut crate_count: u32 = 0;
        let mut cell = 0usize;

        for ch in text.chars() {
            if ch == '\0' || cell >= interior_cells {
                break;
            }
            let Some(tile) = Tile::from_char(ch) else {
                continue;
            };
            let x = cell % interior_w;
            let y = cell / interior_w;
            let pos = ((y + 1) as u16) * self.width + (x + 1) as u16;
            self.apply_tile(pos, tile, &mut player_count, &mut goal_count, &mut crate_count);
            cell += 1;
        }

        self.goal_count = goal_count as u16;
        self.crate_count = crate_count as u16;
        let crates_match_goals = bitset::equals(&self.crates_initial, &self.goals);
        self.compilable = player_count == 1 && goal_count == crate_count && !crates_match_goals;

        if self.compilable {
            if deadlock::check_all_2x2_deadlock(self) {
                self.potentially_solvable = false;
            } else {
                deadlock::generate_deadlock_map(self);
                let crate_on_deadlock = bitset::covers_any(&self.crates_initial, &self.deadlocks);
                self.potentially_solvable =
                    !crate_on_deadlock && deadlock::check_reachability(self);
            }
        }

        self.compilable
    }

    /// Replays `actions` against the initial layout without searching,
    /// checking every move walks onto a non-wall cell, every push moves a
    /// crate onto a non-wall, non-crate cell, and the final layout has
    /// every crate on a goal.
    #[must_use]
    pub fn replay(&self, actions: &str) -> bool {
        if !self.compilable {
            return false;
        }
        let mut player = self.player_initial;
        let mut crates = self.crates_initial.clone();

        for ch in actions.bytes() {
            let Some((direction, is_push)) = decode_action(ch) else {
                return false;
            };
            let next = apply_delta(player, direction.delta(self.width));
            if bitset::get(&self.walls, next) {
                return false;
            }
            if bitset::get(&crates, next) {
                if !is_push {
                    return false;
                }
                let beyond = apply_delta(next, direction.delta(self.width));
                if bitset::get(&self.walls, beyond) || bitset::get(&crates, beyond) {
                    return false;
                }
                bitset::clear(&mut crates, next);
                bitset::set(&mut crates, beyond);
            } else if is_push {
                return false;
            }
            player = next;
        }

        bitset::equals(&crates, &self.goals)
    }

    /// Sum over each crate of its precomputed distance to the nearest
    /// reachable goal (§3 `heuristic`); used by the A* driver.
    pub(crate) fn heuristic_sum(&self, crates: &[u64]) -> u32 {
        bitset::iter_set_bits(crates)
            .map(|p| self.heuristics[p as usize] as u32)
            .sum()
    }

    fn reset_buffers(&mut self) {
        bitset::fill_ones(&mut self.walls, self.area);
        bitset::clear_all(&mut self.goals);
        bitset::clear_all(&mut self.crates_initial);
        bitset::clear_all(&mut self.deadlocks);
        self.heuristics.iter_mut().for_each(|h| *h = self.area as u16);
        self.player_initial = 0;
        self.goal_count = 0;
        self.crate_count = 0;
        self.compilable = false;
        self.potentially_solvable = false;
    }

    fn apply_tile(
        &mut self,
        pos: Pos,
        tile: Tile,
        player_count: &mut u32,
        goal_count: &mut u32,
        crate_count: &mut u32,
    ) {
        match tile {
            Tile::Wall => bitset::set(&mut self.walls, pos),
            Tile::Empty => bitset::clear(&mut self.walls, pos),
            Tile::Goal => {
                bitset::clear(&mut self.walls, pos);
                bitset::set(&mut self.goals, pos);
                *goal_count += 1;
            }
            Tile::Crate => {
                bitset::clear(&mut self.walls, pos);
                bitset::set(&mut self.crates_initial, pos);
                *crate_count += 1;
            }
            Tile::Player => {
                bitset::clear(&mut self.walls, pos);
                self.player_initial = pos;
                *player_count += 1;
            }
            Tile::CrateOnGoal => {
                bitset::clear(&mut self.walls, pos);
                bitset::set(&mut self.goals, pos);
                bitset::set(&mut self.crates_initial, pos);
                *goal_count += 1;
                *crate_count += 1;
            }
            Tile::PlayerOnGoal => {
                bitset::clear(&mut self.walls, pos);
                bitset::set(&mut self.goals, pos);
                self.player_initial = pos;
                *player_count += 1;
                *goal_count += 1;
            }
        }
    }
}

fn decode_action(ch: u8) -> Option<(Direction, bool)> {
    match ch {
        b'l' => Some((Direction::Left, false)),
        b'r' => Some((Direction::Right, false)),
        b'd' => Some((Direction::Down, false)),
        b'u' => Some((Direction::Up, false)),
        b'L' => Some((Direction::Left, true)),
        b'R' => Some((Direction::Right, true)),
        b'D' => Some((Direction::Down, true)),
        b'U' => Some((Direction::Up, true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw_w: u16, raw_h: u16, text: &str) -> Problem {
        let width = raw_w + 2;
        let height = raw_h + 2;
        let area = width as usize * height as usize;
        let bitset_size = bitset::word_count(area);
        let mut problem = Problem::fresh(width, height, area, bitset_size);
        problem.parse(text);
        problem
    }

    #[test]
    fn trivial_one_crate_one_goal_is_compilable_and_solvable() {
        let problem = parse(4, 1, "A10.");
        assert!(problem.compilable);
        assert!(problem.potentially_solvable);
        assert_eq!(problem.crate_count, 1);
        assert_eq!(problem.goal_count, 1);
    }

    #[test]
    fn missing_player_is_not_compilable() {
        let problem = parse(4, 1, "W10.");
        assert!(!problem.compilable);
    }

    #[test]
    fn mismatched_crate_and_goal_counts_are_not_compilable() {
        let problem = parse(5, 1, "A110.");
        assert!(!problem.compilable);
    }

    #[test]
    fn crate_already_on_every_goal_is_not_compilable() {
        // compilable requires crates != goals so there is something to solve
        let problem = parse(3, 1, "Ag.");
        assert!(!problem.compilable);
    }

    #[test]
    fn crate_boxed_by_walls_on_every_side_is_not_potentially_solvable() {
        let level = "A.W1W0";
        let problem = parse(6, 1, level);
        assert!(problem.compilable);
        assert!(!problem.potentially_solvable);
    }

    #[test]
    fn replay_validates_a_correct_solution() {
        let problem = parse(4, 1, "A10.");
        assert!(problem.potentially_solvable);
        assert!(problem.replay("R"));
    }

    #[test]
    fn replay_rejects_a_bogus_action_string() {
        let problem = parse(4, 1, "A10.");
        assert!(!problem.replay("L"));
    }

    #[test]
    fn reparsing_resets_previous_state() {
        let mut problem = parse(4, 1, "A10.");
        assert!(problem.compilable);
        problem.parse("WWWW");
        assert!(!problem.compilable);
        assert_eq!(problem.crate_count, 0);
    }
}
