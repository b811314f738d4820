use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::{Coord, Direction, MazeError, cell::Cell};

/// A rectangular maze grid stored row-major in a flat boxed slice.
///
/// Solvers only ever read a grid; mutation is reserved to the generator in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) fn filled(width: u16, height: u16, cell: Cell) -> Self {
        let cells = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            cells,
            width,
            height,
        }
    }

    /// Builds a grid from rows of cells. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(MazeError::GridTooLarge {
                width,
                height,
                max: u16::MAX,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Grid {
            cells: cells.into_boxed_slice(),
            width: width as u16,
            height: height as u16,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0
            || coord.col == 0
            || coord.row == self.height - 1
            || coord.col == self.width - 1
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        // Cannot overflow: both factors are u16 and usize is at least 32 bits.
        coord.row as usize * self.width as usize + coord.col as usize
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self[coord])
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.cells[idx] = cell;
    }

    /// The in-bounds cell `distance` steps away in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction, distance: u16) -> Option<Coord> {
        coord
            .step(direction, distance)
            .filter(|&next| self.contains(next))
    }

    /// In-bounds, non-wall neighbors of a cell, in [`Direction::ALL`] order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(coord, direction, 1))
            .filter(move |&next| !self[next].is_wall())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// All coordinates paired with their cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let coord = Coord::new((idx / width) as u16, (idx % width) as u16);
            (coord, cell)
        })
    }

    /// Locates the start and goal markers with a single row-major scan.
    /// If a marker occurs more than once, the last occurrence wins.
    pub fn find_start_goal(&self) -> (Option<Coord>, Option<Coord>) {
        self.cells()
            .fold((None, None), |(start, goal), (coord, cell)| match cell {
                Cell::Start => (Some(coord), goal),
                Cell::Goal => (start, Some(coord)),
                _ => (start, goal),
            })
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(coord)]
    }
}

/// Serializes as an array of rows, the layout the game front end renders.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height as usize))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Parses an ASCII sketch of a grid: `#` wall, `.` path, `S` start, `G` goal.
#[cfg(test)]
pub(crate) fn parse_ascii(rows: &[&str]) -> Grid {
    let rows: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '#' => Cell::Wall,
                    '.' => Cell::Path,
                    'S' => Cell::Start,
                    'G' => Cell::Goal,
                    other => panic!("unexpected grid character {other:?}"),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    Grid::from_rows(rows).expect("test grids are rectangular")
}
