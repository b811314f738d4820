use rand::Rng;

use crate::maze::{Cell, Coord, Dimensions, Direction, Grid};

/// Carves a perfect maze with a randomized iterative backtracker.
///
/// Rooms sit at odd (row, col) positions. Starting from the start room, the top of the
/// stack repeatedly carves into a random unvisited room two cells away, opening the wall
/// cell in between, and is popped once it has no unvisited rooms left. Every room ends up
/// visited exactly once, so the carved passages form a spanning tree over the rooms.
///
/// The start and goal rooms are relabelled [`Cell::Start`] and [`Cell::Goal`] at the end.
pub fn iterative_backtrack<R: Rng>(dims: Dimensions, rng: &mut R) -> Grid {
    // Initialize the maze with walls
    let mut grid = Grid::filled(dims.width(), dims.height(), Cell::Wall);

    let start = dims.start();
    grid.set(start, Cell::Path);

    // The stack keeps only room cells
    let mut stack = Vec::with_capacity(dims.room_count());
    stack.push(start);

    while let Some(&current) = stack.last() {
        let neighbors = get_unvisited_rooms(current, &grid);
        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let room = neighbors[rng.random_range(0..neighbors.len())];
        grid.set(current.midpoint(room), Cell::Path);
        grid.set(room, Cell::Path);
        stack.push(room);
    }

    grid.set(start, Cell::Start);
    grid.set(dims.goal(), Cell::Goal);
    grid
}

/// Rooms two steps away from `coord` in each direction that are inside the border
/// and still walled up, in [`Direction::ALL`] order.
fn get_unvisited_rooms(coord: Coord, grid: &Grid) -> Vec<Coord> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| grid.neighbor(coord, direction, 2))
        .filter(|&room| !grid.is_boundary(room) && grid[room].is_wall())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_get_unvisited_rooms() {
        let grid = Grid::filled(7, 7, Cell::Wall);
        let rooms = get_unvisited_rooms(Coord::new(3, 3), &grid);
        assert_eq!(
            rooms,
            vec![
                Coord::new(3, 5),
                Coord::new(3, 1),
                Coord::new(5, 3),
                Coord::new(1, 3)
            ]
        );
        // Corner room only sees the two rooms inside the border
        let rooms = get_unvisited_rooms(Coord::new(1, 1), &grid);
        assert_eq!(rooms, vec![Coord::new(1, 3), Coord::new(3, 1)]);
    }

    #[test]
    fn test_smallest_maze_is_fully_carved() {
        // 5x5 has four rooms; any spanning tree opens exactly three connectors
        let grid = iterative_backtrack(Dimensions::from_odd(5, 5), &mut StdRng::seed_from_u64(7));
        let open = grid.cells().filter(|(_, cell)| !cell.is_wall()).count();
        assert_eq!(open, 4 + 3);
        assert_eq!(grid[Coord::new(2, 2)], Cell::Wall);
    }
}
