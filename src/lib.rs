// ABOUTME: Sokoban solver: puzzle parsing, deadlock analysis, BFS and A* search

//! A solver for the Sokoban puzzle.
//!
//! Given a rectangular grid of walls, goals, crates and one player, this
//! crate finds a sequence of cardinal moves that leaves every crate on a
//! goal. It exposes two search strategies over the puzzle's state graph:
//! uninformed breadth-first search ([`Context::solve_bfs`]) and weighted
//! best-first / A* search ([`Context::solve_astar`]).
//!
//! ```
//! use sokoban_solver::Context;
//!
//! let mut ctx = Context::new(4, 4, 10_000).unwrap();
//! let mut problem = ctx.allocate_problem();
//! problem.parse("..0.\n..+.\n.11.\n....");
//! assert!(problem.potentially_solvable);
//!
//! let result = ctx.solve_bfs(&problem, 0);
//! assert!(result.solved);
//! assert!(problem.replay(result.actions.as_deref().unwrap()));
//! ```

mod bitset;
mod context;
mod deadlock;
mod error;
mod hash_table;
mod heap;
mod position;
mod problem;
mod result;
mod search;
mod state;
mod tile;

pub use context::Context;
pub use error::ContextError;
pub use problem::Problem;
pub use result::SolveResult;
pub use search::astar::AstarStrategy;
pub use tile::Tile;
