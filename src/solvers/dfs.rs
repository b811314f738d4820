use std::collections::{HashMap, HashSet};

use super::{Path, reconstruct_path};
use crate::maze::Grid;

/// Depth-first search from the start marker to the goal marker.
///
/// Each step looks only at the top of the stack and pushes its first unvisited open
/// neighbor. Visited marks are never cleared, so a cell is explored at most once even
/// after the search backtracks past it. The path found is valid but not necessarily short.
pub fn solve_dfs(grid: &Grid) -> Path {
    let (Some(start), Some(goal)) = grid.find_start_goal() else {
        return Path::default();
    };

    let mut visited = HashSet::from([start]);
    let mut parents = HashMap::new();
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        if current == goal {
            let path = reconstruct_path(&parents, goal);
            // Parent links along the live stack are exactly the stack itself
            debug_assert_eq!(path.coords(), stack.as_slice());
            return path;
        }

        match grid.open_neighbors(current).find(|next| !visited.contains(next)) {
            Some(next) => {
                visited.insert(next);
                parents.insert(next, current);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    Path::default() // Goal is unreachable
}
