use std::collections::{HashMap, HashSet, VecDeque};

use super::{Path, reconstruct_path};
use crate::maze::Grid;

/// Breadth-first search from the start marker to the goal marker.
///
/// Returns a shortest path. Among several shortest paths, the one returned is fixed by
/// the neighbor order in [`crate::maze::Direction::ALL`]. Cells are marked visited when
/// enqueued, so each cell enters the frontier at most once.
pub fn solve_bfs(grid: &Grid) -> Path {
    let (Some(start), Some(goal)) = grid.find_start_goal() else {
        return Path::default();
    };

    let mut visited = HashSet::from([start]);
    let mut parents = HashMap::new();
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            return reconstruct_path(&parents, goal);
        }

        for neighbor in grid.open_neighbors(current) {
            if visited.insert(neighbor) {
                parents.insert(neighbor, current);
                frontier.push_back(neighbor);
            }
        }
    }

    Path::default() // Goal is unreachable
}
