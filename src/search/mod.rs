// ABOUTME: Search drivers (BFS, weighted A*) living as impl blocks on Context

pub(crate) mod astar;
pub(crate) mod bfs;
pub(crate) mod expand;

use crate::state::{StateId, StateNode};

/// Walks parent pointers from `parent_id` back to the root, collecting
/// action characters, then appends `last_action` and reverses the whole
/// thing into the solution string.
pub(crate) fn reconstruct_path(states: &[StateNode], parent_id: StateId, last_action: u8) -> String {
    let mut actions = vec![last_action];
    let mut id = parent_id;
    loop {
        let node = &states[id.0 as usize];
        match node.action {
            Some(a) => actions.push(a),
            None => break,
        }
        id = node.parent.expect("a state with an action always has a parent");
    }
    actions.reverse();
    String::from_utf8(actions).expect("action alphabet is ASCII")
}
