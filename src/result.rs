/// Outcome of one `solve_bfs` / `solve_astar` call.
///
/// Failure is never an exception: an unsolvable problem, an iteration cap
/// hit, or an exhausted state budget are all just `solved == false` with
/// the matching flag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub solved: bool,
    pub actions: Option<String>,
    pub iterations: u64,
    pub limit_exceeded: bool,
    pub nodes_expanded: u64,
}

impl SolveResult {
    pub(crate) fn unsolved(iterations: u64, nodes_expanded: u64) -> Self {
        SolveResult {
            solved: false,
            actions: None,
            iterations,
            limit_exceeded: false,
            nodes_expanded,
        }
    }

    pub(crate) fn limit_exceeded(iterations: u64, nodes_expanded: u64) -> Self {
        SolveResult {
            solved: false,
            actions: None,
            iterations,
            limit_exceeded: true,
            nodes_expanded,
        }
    }

    pub(crate) fn solved(actions: String, iterations: u64, nodes_expanded: u64) -> Self {
        SolveResult {
            solved: true,
            actions: Some(actions),
            iterations,
            limit_exceeded: false,
            nodes_expanded,
        }
    }
}
