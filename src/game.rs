use crate::{
    generators::GeneratedMaze,
    maze::{Coord, Direction, Grid},
};

/// Manual play over a maze: the player walks one cell at a time from start to goal.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The maze being played
    grid: Grid,
    /// Tracks where the player currently is
    player: Coord,
    goal: Coord,
    moves: usize,
}

impl GameState {
    /// Starts a game on a grid carrying both a start and a goal marker.
    /// Returns `None` if either marker is missing.
    pub fn new(grid: Grid) -> Option<Self> {
        let (start, goal) = grid.find_start_goal();
        Some(GameState {
            player: start?,
            goal: goal?,
            grid,
            moves: 0,
        })
    }

    pub fn from_generated(maze: GeneratedMaze) -> Self {
        GameState {
            grid: maze.grid,
            player: maze.start,
            goal: maze.goal,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Number of successful moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.player == self.goal
    }

    /// Attempt to move the player one cell in `direction`.
    /// Walls and the grid edge block the move, and no move is made once the goal is reached.
    /// Returns the new position if the move is successful, None otherwise.
    pub fn try_move(&mut self, direction: Direction) -> Option<Coord> {
        if self.goal_reached() {
            return None;
        }
        let next = self
            .grid
            .neighbor(self.player, direction, 1)
            .filter(|&next| !self.grid[next].is_wall())?;

        tracing::debug!(from = ?self.player, to = ?next, "player moved");
        self.player = next;
        self.moves += 1;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::generate_maze_seeded,
        maze::{Dimensions, grid::parse_ascii},
        solvers::{Solver, solve_maze},
    };

    fn corridor() -> GameState {
        GameState::new(parse_ascii(&[
            "#####", //
            "#S..#", //
            "###G#", //
            "#####",
        ]))
        .unwrap()
    }

    #[test]
    fn test_new_requires_markers() {
        assert!(GameState::new(parse_ascii(&["S..", "..."])).is_none());
        assert!(GameState::new(parse_ascii(&["...", "..G"])).is_none());

        let game = corridor();
        assert_eq!(game.player(), Coord::new(1, 1));
        assert_eq!(game.goal(), Coord::new(2, 3));
        assert!(!game.goal_reached());
    }

    #[test]
    fn test_walls_block_moves() {
        let mut game = corridor();
        assert_eq!(game.try_move(Direction::Up), None);
        assert_eq!(game.try_move(Direction::Left), None);
        assert_eq!(game.try_move(Direction::Down), None);
        assert_eq!(game.player(), Coord::new(1, 1));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_grid_edge_blocks_moves() {
        let mut game = GameState::new(parse_ascii(&["S.G"])).unwrap();
        assert_eq!(game.try_move(Direction::Up), None);
        assert_eq!(game.try_move(Direction::Down), None);
        assert_eq!(game.try_move(Direction::Left), None);
        assert_eq!(game.player(), Coord::new(0, 0));
    }

    #[test]
    fn test_legal_moves_reach_goal() {
        let mut game = corridor();
        assert_eq!(game.try_move(Direction::Right), Some(Coord::new(1, 2)));
        assert_eq!(game.try_move(Direction::Right), Some(Coord::new(1, 3)));
        assert!(!game.goal_reached());
        assert_eq!(game.try_move(Direction::Down), Some(Coord::new(2, 3)));
        assert!(game.goal_reached());
        assert_eq!(game.moves(), 3);

        // The game is over once the goal is reached
        assert_eq!(game.try_move(Direction::Up), None);
        assert_eq!(game.player(), Coord::new(2, 3));
    }

    #[test]
    fn test_following_solution_wins_generated_maze() {
        let maze = generate_maze_seeded(Dimensions::from_odd(21, 21), Some(3));
        let path = solve_maze(&maze.grid, Solver::Bfs);
        let mut game = GameState::from_generated(maze);

        for pair in path.coords().windows(2) {
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| pair[0].step(d, 1) == Some(pair[1]))
                .unwrap();
            assert_eq!(game.try_move(direction), Some(pair[1]));
        }
        assert!(game.goal_reached());
        assert_eq!(game.moves(), path.moves());
    }
}
