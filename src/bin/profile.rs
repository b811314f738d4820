use std::time::{Duration, Instant};

use mazeforge::{
    generators::{generate_maze, get_rng},
    levels::Level,
    logging,
    solvers::{Solver, solve_maze},
};

fn main() {
    let _guard = logging::init(None);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1000);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let level = Level::resolve(10);
    let mut rng = get_rng(seed);
    let mut generation = Duration::ZERO;
    let mut solving = [Duration::ZERO; Solver::ALL.len()];
    let mut moves = [0usize; Solver::ALL.len()];

    for _ in 0..num_iters {
        let now = Instant::now();
        let maze = generate_maze(level.dimensions(), &mut rng);
        generation += now.elapsed();

        for (idx, solver) in Solver::ALL.into_iter().enumerate() {
            let now = Instant::now();
            let path = solve_maze(&maze.grid, solver);
            solving[idx] += now.elapsed();
            moves[idx] += path.moves();
        }
    }

    let per_iter = |total: Duration| total / num_iters.max(1) as u32;
    tracing::info!(
        level = level.id(),
        iterations = num_iters,
        generate = ?per_iter(generation),
        "maze generation"
    );
    for (idx, solver) in Solver::ALL.into_iter().enumerate() {
        tracing::info!(
            solver = solver.selector(),
            solve = ?per_iter(solving[idx]),
            avg_moves = moves[idx] / num_iters.max(1),
            "maze solving"
        );
    }
}
