pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    Red,
}

/// Returned by [`Board::drop_token`] when the target column has no open cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            last_move: None,
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Coordinates of the most recent successful drop, if any.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a token in a column, returns the row where it landed.
    ///
    /// A full column is an ordinary outcome, reported as `Err(ColumnFull)`
    /// with no mutation. An out-of-range column is a caller bug and panics.
    pub fn drop_token(&mut self, col: usize, cell: Cell) -> Result<usize, ColumnFull> {
        assert!(col < COLS, "column {col} out of range");

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                self.last_move = Some((row, col));
                return Ok(row);
            }
        }

        Err(ColumnFull)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Clear every cell and forget the last placement.
    pub fn reset(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
