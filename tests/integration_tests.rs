// ABOUTME: End-to-end scenarios straight from the solver's testable-properties table

use sokoban_solver::{AstarStrategy, Context};

fn solved_problem(ctx: &Context, level: &str) -> sokoban_solver::Problem {
    let mut problem = ctx.allocate_problem();
    problem.parse(level);
    problem
}

#[test]
fn scenario_1_crates_outnumber_goals_is_not_compilable() {
    let ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "....\n..+.\n.11.\n....");
    assert!(!problem.compilable);
}

#[test]
fn scenario_2_compilable_but_unsolved_after_exhaustive_search() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.1.1\n.WW.");
    assert!(problem.compilable);
    let result = ctx.solve_bfs(&problem, 10_000);
    assert!(!result.solved);
    assert!(!result.limit_exceeded);
}

#[test]
fn scenario_3_crate_already_deadlocked_is_not_potentially_solvable() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, ".10.\n..A.\n0110\n0110");
    assert!(problem.compilable);
    assert!(!problem.potentially_solvable);
    let result = ctx.solve_bfs(&problem, 10_000);
    assert!(!result.solved);
}

#[test]
fn scenario_4_bfs_finds_the_optimal_twelve_move_solution() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.11.\n....");
    assert!(problem.potentially_solvable);
    let result = ctx.solve_bfs(&problem, 10_000);
    assert!(result.solved);
    let actions = result.actions.expect("solved result always carries actions");
    assert_eq!(actions.len(), 12);
    assert!(problem.replay(&actions));
}

#[test]
fn scenario_5_astar_matches_bfs_optimal_length() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.11.\n....");
    let (h, g) = AstarStrategy::AStar.factors();
    let result = ctx.solve_astar(&problem, h, g, 10_000);
    assert!(result.solved);
    let actions = result.actions.expect("solved result always carries actions");
    assert_eq!(actions.len(), 12);
    assert!(problem.replay(&actions));
}

#[test]
fn scenario_6_greedy_astar_finds_some_valid_push_sequence() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, ".Wg.\ngW..\n.WWW\nA.10");
    assert!(problem.potentially_solvable);
    let (h, g) = AstarStrategy::Greedy.factors();
    let result = ctx.solve_astar(&problem, h, g, 10_000);
    assert!(result.solved);
    let actions = result.actions.expect("solved result always carries actions");
    assert!(problem.replay(&actions));
}

#[test]
fn max_iterations_of_one_reports_limit_exceeded_on_a_multi_step_solve() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.11.\n....");
    let result = ctx.solve_bfs(&problem, 1);
    assert!(!result.solved);
    assert!(result.limit_exceeded);
}

#[test]
fn capacity_of_one_reports_limit_exceeded_once_the_root_expands() {
    let mut ctx = Context::new(4, 4, 1).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.11.\n....");
    let result = ctx.solve_bfs(&problem, 0);
    assert!(!result.solved);
    assert!(result.limit_exceeded);
}

#[test]
fn bfs_is_deterministic_across_repeated_runs() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let problem = solved_problem(&ctx, "..0.\n..+.\n.11.\n....");
    let first = ctx.solve_bfs(&problem, 10_000);
    let second = ctx.solve_bfs(&problem, 10_000);
    assert_eq!(first.actions, second.actions);
}

#[test]
fn reparsing_the_same_text_yields_identical_derived_maps() {
    let mut ctx = Context::new(4, 4, 10_000).unwrap();
    let mut problem = ctx.allocate_problem();
    problem.parse("..0.\n..+.\n.11.\n....");
    let first = ctx.solve_bfs(&problem, 10_000);

    problem.parse("..0.\n..+.\n.11.\n....");
    assert!(problem.compilable);
    assert!(problem.potentially_solvable);
    let second = ctx.solve_bfs(&problem, 10_000);

    assert_eq!(first.actions, second.actions);
    assert!(problem.replay(first.actions.as_deref().unwrap()));
}

#[test]
fn invalid_level_text_is_reported_as_not_compilable() {
    let ctx = Context::new(4, 4, 10_000).unwrap();
    let mut problem = ctx.allocate_problem();
    assert!(!problem.parse("WWWW\nWWWW\nWWWW\nWWWW"));
    assert!(!problem.compilable);
    assert!(!problem.potentially_solvable);
}
