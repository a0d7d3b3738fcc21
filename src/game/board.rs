use serde::{Serialize, Serializer};

use super::Variant;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// 0 for empty, otherwise the owning player's number
    pub fn number(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }
}

/// The four axes a run can lie on: horizontal, vertical and both diagonals.
/// Each is walked in both directions from the placed token.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A `rows × cols` grid stored row-major. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board sized for `variant`
    pub fn new(variant: Variant) -> Self {
        Self::with_size(variant.rows(), variant.cols())
    }

    /// Create an empty board of arbitrary size
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position, `None` if it is off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// In-crate shorthand for positions already known to be on the board.
    ///
    /// Panics if the position is off the board.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) is off the board");
        self.cells[row * self.cols + col]
    }

    /// Signed lookup used when walking runs; `None` past any edge.
    fn at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Check if a column is full (its top cell is taken). Columns off the
    /// board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// Columns that can still take a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a 0-based column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::OutOfRange {
                column: col as i64 + 1,
                cols: self.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col + 1));
        }

        // Lowest empty row; exists because the top cell is empty
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col + 1))?;
        self.cells[row * self.cols + col] = cell;
        Ok(row)
    }

    /// The board is full once every top-row cell is occupied
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check whether the token at (row, col) completes a run of at least
    /// `connect_n` along any axis. Empty or off-board positions never win,
    /// and neither does a zero run length.
    pub fn check_win(&self, row: usize, col: usize, connect_n: usize) -> bool {
        if connect_n == 0 {
            return false;
        }
        let cell = match self.cell(row, col) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };

        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell);
            run >= connect_n
        })
    }

    /// Count contiguous `cell` tokens starting one step away from (row, col)
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.at(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Variant::Standard)
    }
}

/// Serialized as a list of rows, top first, each cell as 0/1/2.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.cells
                .chunks(self.cols.max(1))
                .map(|row| row.iter().map(|c| c.number()).collect::<Vec<u8>>()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for variant in [Variant::Standard, Variant::Large] {
            let board = Board::new(variant);
            assert_eq!(board.rows(), variant.rows());
            assert_eq!(board.cols(), variant.cols());
            for row in 0..board.rows() {
                for col in 0..board.cols() {
                    assert_eq!(board.get(row, col), Cell::Empty);
                }
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::One);

        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(board.drop_piece(0, Cell::Two), Err(MoveError::ColumnFull(1)));
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Cell::One),
            Err(MoveError::OutOfRange { column: 8, cols: 7 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(Variant::Large);
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.count(Cell::One), 63);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.check_win(5, 2, 4));
        assert!(!board.check_win(5, 2, 5));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Two).unwrap();
        }
        assert!(board.check_win(2, 3, 4));
        // Counting extends both ways, so a middle token also sees the run
        assert!(board.check_win(4, 3, 4));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        let row = board.drop_piece(3, Cell::One).unwrap();

        assert!(board.check_win(row, 3, 4));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        board.drop_piece(6, Cell::One).unwrap();

        board.drop_piece(5, Cell::Two).unwrap();
        board.drop_piece(5, Cell::One).unwrap();

        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        let row = board.drop_piece(3, Cell::One).unwrap();

        assert!(board.check_win(row, 3, 4));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(!board.check_win(5, 1, 4));
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        let mut board = Board::default();
        // Right edge of row 4 followed by left edge of row 5 in storage order
        board.drop_piece(5, Cell::Two).unwrap();
        board.drop_piece(6, Cell::Two).unwrap();
        board.drop_piece(5, Cell::One).unwrap();
        board.drop_piece(6, Cell::One).unwrap();
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::One).unwrap();
        assert!(!board.check_win(4, 6, 4));
        assert!(!board.check_win(5, 0, 4));
    }

    #[test]
    fn test_off_board_lookups_do_not_panic() {
        let mut board = Board::default();
        board.drop_piece(0, Cell::One).unwrap();
        assert_eq!(board.cell(5, 0), Some(Cell::One));
        assert_eq!(board.cell(6, 0), None);
        assert_eq!(board.cell(0, 7), None);
        assert!(!board.check_win(6, 0, 4));
        assert!(!board.check_win(0, 7, 1));
        assert!(!board.check_win(5, 0, 0));
        assert!(board.check_win(5, 0, 1));
    }

    #[test]
    fn test_serializes_as_rows() {
        let mut board = Board::with_size(2, 3);
        board.drop_piece(1, Cell::Two).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[0,0,0],[0,2,0]]");
    }
}
