use std::{collections::HashSet, fmt};

use crossterm::style::{Color, Stylize};

use super::{Coord, cell::Cell, grid::Grid};

/// Terminal view of a grid, optionally with a solution route drawn over its path cells.
pub struct GridView<'a> {
    grid: &'a Grid,
    route: Option<(&'a [Coord], Color)>,
    player: Option<Coord>,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        GridView {
            grid,
            route: None,
            player: None,
        }
    }

    /// Overlay `route` in the given color. Start and goal keep their own glyphs.
    pub fn with_route(mut self, route: &'a [Coord], color: Color) -> Self {
        self.route = Some((route, color));
        self
    }

    /// Draw the player marker at `coord`, over whatever cell is there.
    pub fn with_player(mut self, coord: Coord) -> Self {
        self.player = Some(coord);
        self
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_route: HashSet<Coord> = self
            .route
            .map(|(route, _)| route.iter().copied().collect())
            .unwrap_or_default();
        let color = self.route.map_or(Color::Reset, |(_, color)| color);

        for (row, cells) in self.grid.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let coord = Coord::new(row as u16, col as u16);
                if self.player == Some(coord) {
                    write!(f, "{}", "🟡".with(Color::Yellow))?;
                } else if cell == Cell::Path && on_route.contains(&coord) {
                    write!(f, "{}", "██".with(color))?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
