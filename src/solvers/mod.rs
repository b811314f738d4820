use std::{collections::HashMap, str::FromStr};

use serde::Serialize;
use thiserror::Error;

mod bfs;
mod dfs;

pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

use crate::maze::{Coord, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
}

impl Solver {
    /// Available maze solvers
    pub const ALL: [Solver; 2] = [Solver::Bfs, Solver::Dfs];

    /// The selector string used on the wire.
    pub fn selector(&self) -> &'static str {
        match self {
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown solver `{0}`, expected `bfs` or `dfs`")]
pub struct UnknownSolver(pub String);

impl FromStr for Solver {
    type Err = UnknownSolver;

    /// Selectors are matched exactly; `"BFS"` is not a valid selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.selector() == s)
            .ok_or_else(|| UnknownSolver(s.to_owned()))
    }
}

/// An ordered start-to-goal route through 4-adjacent open cells.
/// Empty when no route exists or the grid had no start or goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Coord>);

impl Path {
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves along the path, one less than the number of cells.
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// Solve the grid with the given algorithm.
pub fn solve_maze(grid: &Grid, solver: Solver) -> Path {
    let path = match solver {
        Solver::Bfs => solve_bfs(grid),
        Solver::Dfs => solve_dfs(grid),
    };
    tracing::debug!(
        solver = solver.selector(),
        width = grid.width(),
        height = grid.height(),
        moves = path.moves(),
        found = !path.is_empty(),
        "solved maze"
    );
    path
}

/// Solve the grid with the algorithm named by `selector`.
/// An unknown selector is not an error; it yields an empty path.
pub fn solve_with(grid: &Grid, selector: &str) -> Path {
    match selector.parse::<Solver>() {
        Ok(solver) => solve_maze(grid, solver),
        Err(err) => {
            tracing::warn!(%err, "cannot solve maze");
            Path::default()
        }
    }
}

/// Walks parent links back from `goal` to the search root and returns the
/// route in start-to-goal order. The root is the only cell without a parent.
fn reconstruct_path(parents: &HashMap<Coord, Coord>, goal: Coord) -> Path {
    let mut route = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        route.push(parent);
        current = parent;
    }
    route.reverse();
    Path(route)
}
