//! Maze grid parsed from an ASCII layout
//!
//! `#` is a wall, anything else is open floor. The grid is immutable once built.

use glam::IVec2;

use crate::error::MazeError;

/// The built-in maze (9 rows x 20 columns)
pub const DEFAULT_LAYOUT: [&str; 9] = [
    "####################",
    "#   #        #     #",
    "# # # ### ## #   ## ",
    "# #   #   #       # ",
    "# ##### # ### # ### ",
    "#       #   # #     ",
    "####### ### # ### # ",
    "#       #   #      #",
    "####################",
];

/// Character that marks a wall cell
pub const WALL_CHAR: char = '#';

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        if c == WALL_CHAR { Cell::Wall } else { Cell::Open }
    }
}

/// Rectangular grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Parse a layout of equal-length rows
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let first = rows.first().ok_or(MazeError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(MazeError::Ragged {
                    row,
                    expected: width,
                    actual,
                });
            }
            cells.extend(line.chars().map(Cell::from_char));
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// The built-in layout
    pub fn default_maze() -> Self {
        Self::parse(&DEFAULT_LAYOUT).expect("built-in layout is rectangular")
    }

    /// (width, height) in cells
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn cell(&self, pos: IVec2) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells
            .get(pos.y as usize * self.width + pos.x as usize)
            .copied()
    }

    /// True only for in-bounds wall cells
    #[inline]
    pub fn is_wall(&self, pos: IVec2) -> bool {
        self.cell(pos) == Some(Cell::Wall)
    }

    /// Centre cell (floor of half each dimension). May be a wall.
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// All wall positions in row-major order (for drawing)
    pub fn walls(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Wall)
            .map(|(i, _)| IVec2::new((i % self.width) as i32, (i / self.width) as i32))
    }
}

impl Default for MazeGrid {
    fn default() -> Self {
        Self::default_maze()
    }
}
