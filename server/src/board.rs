//! Board storage and rendering.
//!
//! A [`Board`] never hands out its cells. Callers take a [`Grid`] copy with
//! [`Board::snapshot`], work on it, and hand it back with [`Board::commit`].
//! The board itself lives behind the single lock in
//! [`GameState`](crate::game::GameState), so a snapshot/commit pair made
//! through one guard is atomic.

/// A cell is either empty or holds one lowercase ASCII letter.
pub type Cell = Option<u8>;

/// Plain rows×columns grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }

    pub fn set(&mut self, row: usize, column: usize, letter: u8) {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = Some(letter);
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[row * self.columns..(row + 1) * self.columns]
            .iter()
            .copied()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[column..].iter().step_by(self.columns).copied()
    }
}

/// The shared game board. Dimensions are fixed at construction.
#[derive(Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates an empty board. Both dimensions must be positive.
    pub fn new(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        Self {
            grid: Grid::new(rows, columns),
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    pub fn columns(&self) -> usize {
        self.grid.columns
    }

    /// Deep copy of the current contents.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Replaces the live contents with `grid`.
    pub fn commit(&mut self, grid: Grid) {
        debug_assert_eq!((grid.rows, grid.columns), (self.grid.rows, self.grid.columns));
        self.grid = grid;
    }

    /// Bordered text rendering, one newline-terminated line per board row
    /// plus a top and bottom border.
    pub fn render(&self) -> String {
        let border = format!("+{}+\n", "-".repeat(self.columns()));
        let mut out = String::with_capacity((self.rows() + 2) * (self.columns() + 3));

        out.push_str(&border);
        for row in 0..self.rows() {
            out.push('|');
            out.extend(self.grid.row(row).map(|cell| cell.map_or(' ', char::from)));
            out.push_str("|\n");
        }
        out.push_str(&border);

        out
    }
}
