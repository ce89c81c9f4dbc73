use super::player::PlayerId;
use crate::error::BoardError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of same-player cells in a winning line.
pub const LINE_LEN: usize = 4;

/// Contents of a single cell: the occupying player, or `None` when empty.
pub type Cell = Option<PlayerId>;

/// The four orientations a line can take, anchored at its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right (→)
    Horizontal,
    /// Top to bottom (↓)
    Vertical,
    /// Down and to the right (↘)
    DiagonalDownRight,
    /// Down and to the left (↙)
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by [`Board::winning_line`].
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, col) step between consecutive cells of a line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four contiguous in-bounds cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub cells: [(usize, usize); LINE_LEN],
    pub direction: Direction,
}

impl Line {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Row-major occupancy grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a specific position.
    /// Positions outside the board read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.in_bounds(row, col) {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_drop_row(col).is_none()
    }

    /// Lowest empty row in `col`, scanning from the bottom up.
    /// `None` when the column is full or does not exist.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Mark an empty cell as occupied by `player`.
    ///
    /// Writing outside the board or over an occupied cell is a caller bug:
    /// it panics in debug builds and is rejected without effect otherwise.
    pub fn place_piece(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), BoardError> {
        debug_assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) is outside the board"
        );
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }

        let idx = row * self.cols + col;
        debug_assert!(
            self.cells[idx].is_none(),
            "cell ({row}, {col}) is already occupied"
        );
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Option<usize> {
        let row = self.find_drop_row(col)?;
        self.place_piece(row, col, player).ok()?;
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether any line on the board belongs entirely to `player`.
    pub fn check_win(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }

    /// First winning line for `player`, scanning anchors in row-major order
    /// and, per anchor, directions in [`Direction::ALL`] order.
    pub fn winning_line(&self, player: PlayerId) -> Option<Line> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                for dir in Direction::ALL {
                    if let Some(line) = self.line_from(row, col, dir) {
                        if self.owned_by(&line, player) {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// Same answer as [`Board::check_win`] for a board whose only possible
    /// new line passes through (row, col), i.e. right after a drop there.
    pub fn check_win_through(&self, row: usize, col: usize, player: PlayerId) -> bool {
        self.winning_line_through(row, col, player).is_some()
    }

    /// A winning line for `player` that contains (row, col).
    pub fn winning_line_through(&self, row: usize, col: usize, player: PlayerId) -> Option<Line> {
        if self.get(row, col) != Some(player) {
            return None;
        }

        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let back = self.run_length(row, col, -dr, -dc, player);
            let forward = self.run_length(row, col, dr, dc, player);

            if back + forward + 1 >= LINE_LEN {
                let (start_row, start_col) = self.offset(row, col, -dr, -dc, back)?;
                return self.line_from(start_row, start_col, dir);
            }
        }
        None
    }

    /// The line anchored at (row, col) in `dir`, if all four cells are in bounds.
    pub fn line_from(&self, row: usize, col: usize, dir: Direction) -> Option<Line> {
        let (dr, dc) = dir.delta();
        let mut cells = [(0, 0); LINE_LEN];
        for (step, slot) in cells.iter_mut().enumerate() {
            *slot = self.offset(row, col, dr, dc, step)?;
        }
        Some(Line {
            cells,
            direction: dir,
        })
    }

    fn owned_by(&self, line: &Line, player: PlayerId) -> bool {
        line.cells
            .iter()
            .all(|&(row, col)| self.get(row, col) == Some(player))
    }

    /// Count consecutive `player` cells stepping away from (row, col), excluding it.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> usize {
        let mut count = 0;
        while let Some((r, c)) = self.offset(row, col, dr, dc, count + 1) {
            if self.get(r, c) != Some(player) {
                break;
            }
            count += 1;
        }
        count
    }

    fn offset(&self, row: usize, col: usize, dr: isize, dc: isize, steps: usize) -> Option<(usize, usize)> {
        let steps = steps as isize;
        let r = row.checked_add_signed(dr * steps)?;
        let c = col.checked_add_signed(dc * steps)?;
        self.in_bounds(r, c).then_some((r, c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
