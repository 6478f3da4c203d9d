// ABOUTME: Per-direction child expansion shared by the BFS and A* drivers

use crate::bitset;
use crate::position::{apply_delta, Direction, Pos};
use crate::problem::Problem;

pub(crate) enum Expansion {
    Move { player: Pos, action: u8 },
    Push { player: Pos, from: Pos, to: Pos, action: u8 },
}

/// Tries to move or push in `direction` from `player` against the current
/// `crates` layout. Returns `None` if the move is blocked by a wall, the
/// crate behind it, a precomputed static deadlock cell, or a fresh 2x2
/// deadlock the push would create.
pub(crate) fn expand(
    problem: &Problem,
    width: u16,
    player: Pos,
    crates: &[u64],
    direction: Direction,
) -> Option<Expansion> {
    let player_next = apply_delta(player, direction.delta(width));
    if bitset::get(&problem.walls, player_next) {
        return None;
    }

    if !bitset::get(crates, player_next) {
        return Some(Expansion::Move {
            player: player_next,
            action: direction.lower(),
        });
    }

    let crate_next = apply_delta(player_next, direction.delta(width));
    if bitset::get(&problem.walls, crate_next)
        || bitset::get(crates, crate_next)
        || bitset::get(&problem.deadlocks, crate_next)
    {
        return None;
    }
    if check_single_2x2_deadlock(crates, &problem.walls, &problem.goals, width, crate_next, direction) {
        return None;
    }

    Some(Expansion::Push {
        player: player_next,
        from: player_next,
        to: crate_next,
        action: direction.upper(),
    })
}

/// Checks whether pushing a crate to `p` just closed a 2x2 square of
/// wall-or-crate cells that contains at least one crate not on a goal.
fn check_single_2x2_deadlock(
    crates: &[u64],
    walls: &[u64],
    goals: &[u64],
    width: u16,
    p: Pos,
    direction: Direction,
) -> bool {
    for orthogonal in direction.orthogonals() {
        let d_delta = direction.delta(width);
        let o_delta = orthogonal.delta(width);
        let corners = [
            p,
            apply_delta(p, d_delta),
            apply_delta(p, o_delta),
            apply_delta(p, d_delta + o_delta),
        ];

        let mut closed = true;
        let mut has_unsafe_crate = false;
        for &c in &corners {
            let is_wall = bitset::get(walls, c);
            let is_crate = c == p || bitset::get(crates, c);
            if !(is_wall || is_crate) {
                closed = false;
                break;
            }
            if is_crate && !bitset::get(goals, c) {
                has_unsafe_crate = true;
            }
        }
        if closed && has_unsafe_crate {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Problem;

    fn problem_with(raw_w: u16, raw_h: u16) -> Problem {
        let width = raw_w + 2;
        let height = raw_h + 2;
        let area = width as usize * height as usize;
        let bitset_size = bitset::word_count(area);
        Problem::fresh(width, height, area, bitset_size)
    }

    #[test]
    fn move_into_empty_floor_succeeds() {
        let mut problem = problem_with(3, 1);
        let width = problem.width;
        bitset::clear(&mut problem.walls, width + 1);
        bitset::clear(&mut problem.walls, width + 2);
        let crates = vec![0u64; problem.walls.len()];
        let result = expand(&problem, width, width + 1, &crates, Direction::Right);
        assert!(matches!(result, Some(Expansion::Move { .. })));
    }

    #[test]
    fn push_into_wall_is_blocked() {
        let mut problem = problem_with(3, 1);
        let width = problem.width;
        bitset::clear(&mut problem.walls, width + 1);
        bitset::clear(&mut problem.walls, width + 2);
        // width + 3 stays a wall
        let mut crates = vec![0u64; problem.walls.len()];
        bitset::set(&mut crates, width + 2);
        let result = expand(&problem, width, width + 1, &crates, Direction::Right);
        assert!(result.is_none());
    }

    #[test]
    fn push_that_seals_a_crate_into_the_corner_is_rejected() {
        // 3x3 room; a crate pushed into the (1,1) corner is boxed in by
        // the two border walls on its other two sides.
        let mut problem = problem_with(3, 3);
        let width = problem.width;
        for y in 1..=3u16 {
            for x in 1..=3u16 {
                bitset::clear(&mut problem.walls, y * width + x);
            }
        }
        let player = width + 3; // interior (3,1)
        let mut crates = vec![0u64; problem.walls.len()];
        bitset::set(&mut crates, width + 2); // interior (2,1), next to the corner
        let result = expand(&problem, width, player, &crates, Direction::Left);
        assert!(result.is_none());
    }
}
