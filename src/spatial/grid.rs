//! Logical cell grid shared by maze and lattice layouts
//!
//! A grid is a matrix of open and wall cells. Mazes carve it cell by cell;
//! lattices start fully open. Callers only ever read it.

use ndarray::Array2;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Part of the carved path network
    Open,
    /// Solid background
    #[default]
    Wall,
}

/// Grid cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (grows downwards)
    pub row: usize,
    /// Column index (grows rightwards)
    pub col: usize,
}

impl Cell {
    /// Create a cell reference
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Which 4-neighbors of a cell are open; `false` past the grid boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// Cell above
    pub up: bool,
    /// Cell below
    pub down: bool,
    /// Cell to the left
    pub left: bool,
    /// Cell to the right
    pub right: bool,
}

impl Neighbors {
    /// Number of open neighbors
    pub const fn count(self) -> usize {
        self.up as usize + self.down as usize + self.left as usize + self.right as usize
    }
}

/// Row and column deltas in up, right, down, left order
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Matrix of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell a wall
    pub fn walled(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), CellState::Wall),
        }
    }

    /// Create a `rows x cols` grid with every cell open
    pub fn uniform(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), CellState::Open),
        }
    }

    /// Build a grid from rows of `'#'` (wall) and any other character (open)
    ///
    /// Rows shorter than the longest one are padded with walls.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::walled(rows.len(), cols);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch != '#' {
                    grid.open(Cell::new(row, col));
                }
            }
        }
        grid
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// State of a cell, `None` outside the grid
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.cells.get([cell.row, cell.col]).copied()
    }

    /// True when the cell exists and is open
    pub fn is_open(&self, cell: Cell) -> bool {
        self.state(cell) == Some(CellState::Open)
    }

    pub(crate) fn open(&mut self, cell: Cell) {
        if let Some(state) = self.cells.get_mut([cell.row, cell.col]) {
            *state = CellState::Open;
        }
    }

    /// Neighbor in direction `(dr, dc)`, `None` past the boundary
    pub(crate) fn step(&self, cell: Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        (row < self.rows() && col < self.cols()).then_some(Cell::new(row, col))
    }

    /// Open flags of the four neighbors of a cell
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        let open_at = |delta| self.step(cell, delta).is_some_and(|n| self.is_open(n));
        Neighbors {
            up: open_at((-1, 0)),
            down: open_at((1, 0)),
            left: open_at((0, -1)),
            right: open_at((0, 1)),
        }
    }

    /// Open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, state)| **state == CellState::Open)
            .map(|((row, col), _)| Cell::new(row, col))
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state == CellState::Open)
            .count()
    }

    /// Render as rows of `'#'` for walls and `'.'` for open cells
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|state| match state {
                        CellState::Open => '.',
                        CellState::Wall => '#',
                    })
                    .collect()
            })
            .collect()
    }
}
