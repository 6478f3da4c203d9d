// ABOUTME: Thin CLI demo client: reads a level file, solves it, prints the moves

use std::env;
use std::fs;
use std::process::ExitCode;

use sokoban_solver::Context;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sokoban-solver".to_string());
    let Some(path) = args.next() else {
        eprintln!("usage: {program} <level-file>");
        return ExitCode::FAILURE;
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (raw_width, raw_height) = match level_dimensions(&text) {
        Some(dims) => dims,
        None => {
            eprintln!("level file is empty");
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = match Context::new(raw_width, raw_height, 1_000_000) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("cannot build a solver context for {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut problem = ctx.allocate_problem();
    if !problem.parse(&text) {
        eprintln!("{path} is not a valid Sokoban level");
        return ExitCode::FAILURE;
    }
    if !problem.potentially_solvable {
        println!("level is statically unsolvable");
        return ExitCode::SUCCESS;
    }

    let result = ctx.solve_bfs(&problem, 0);
    if result.solved {
        let actions = result.actions.unwrap_or_default();
        println!("solved in {} moves: {}", actions.len(), actions);
    } else if result.limit_exceeded {
        println!("search limit exceeded after {} iterations", result.iterations);
    } else {
        println!("no solution exists");
    }
    ExitCode::SUCCESS
}

/// A level file is rows of tile characters separated by newlines; this
/// counts the widest row and the number of rows to size the [`Context`].
fn level_dimensions(text: &str) -> Option<(u32, u32)> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
    let width = rows.iter().map(|row| row.chars().count()).max()?;
    Some((width as u32, rows.len() as u32))
}
