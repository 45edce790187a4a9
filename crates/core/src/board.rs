//! Board module - the 5x4 grid of tile values
//!
//! The board is a small `Copy` value so the engine can take one and hand a
//! new one back; change detection is plain structural equality.
//! Coordinates: (row, col) where row ranges 0..5 (top to bottom) and col
//! ranges 0..4 (left to right).

use arrayvec::ArrayVec;

use crate::types::{is_valid_tile, Direction, TileValue, CELLS, COLS, MAX_LINE, ROWS};

/// One row or column, in direction-of-travel order.
pub type Line = ArrayVec<TileValue, MAX_LINE>;

/// The game board - 5 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[TileValue; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; COLS]; ROWS],
        }
    }

    /// Build a board from explicit rows (row 0 is the top).
    pub fn from_rows(rows: [[TileValue; COLS]; ROWS]) -> Self {
        let board = Self { cells: rows };
        debug_assert!(board.is_well_formed(), "malformed board: {:?}", rows);
        board
    }

    pub fn rows(&self) -> &[[TileValue; COLS]; ROWS] {
        &self.cells
    }

    /// Get the value at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<TileValue> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the value at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: TileValue) -> bool {
        debug_assert!(is_valid_tile(value), "invalid tile value {}", value);
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Number of lines a swipe in `direction` slides.
    pub fn line_count(direction: Direction) -> usize {
        if direction.is_horizontal() {
            ROWS
        } else {
            COLS
        }
    }

    /// Length of each line a swipe in `direction` slides.
    pub fn line_len(direction: Direction) -> usize {
        if direction.is_horizontal() {
            COLS
        } else {
            ROWS
        }
    }

    /// Map the i-th position along a line (in direction-of-travel order) to
    /// board coordinates.
    #[inline(always)]
    fn coord(direction: Direction, line: usize, i: usize) -> (usize, usize) {
        match direction {
            Direction::Left => (line, i),
            Direction::Right => (line, COLS - 1 - i),
            Direction::Up => (i, line),
            Direction::Down => (ROWS - 1 - i, line),
        }
    }

    /// Read a whole line, ordered from the edge tiles slide towards.
    ///
    /// For `Left` that is row `index` left-to-right, for `Down` it is column
    /// `index` bottom-to-top, and so on.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut out = Line::new();
        for i in 0..Self::line_len(direction) {
            let (r, c) = Self::coord(direction, index, i);
            out.push(self.cells[r][c]);
        }
        out
    }

    /// Write a line given in direction-of-travel order back into physical order.
    pub fn set_line(&mut self, direction: Direction, index: usize, values: &[TileValue]) {
        debug_assert_eq!(values.len(), Self::line_len(direction));
        for (i, &v) in values.iter().enumerate() {
            let (r, c) = Self::coord(direction, index, i);
            self.cells[r][c] = v;
        }
    }

    /// Coordinates of every empty cell, in row-major order.
    ///
    /// This is stack-only and does not allocate.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELLS> {
        let mut out = ArrayVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&v| v != 0))
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| v as u64)
            .sum()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> TileValue {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Mirror left-to-right.
    pub fn mirror_horizontal(&self) -> Self {
        let mut out = *self;
        for row in out.cells.iter_mut() {
            row.reverse();
        }
        out
    }

    /// Mirror top-to-bottom.
    pub fn mirror_vertical(&self) -> Self {
        let mut out = *self;
        out.cells.reverse();
        out
    }

    /// Every cell is `0` or a power of two >= 2.
    pub fn is_well_formed(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&v| is_valid_tile(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([
            [2, 0, 0, 4],
            [0, 8, 0, 0],
            [0, 0, 16, 0],
            [0, 0, 0, 0],
            [32, 0, 0, 2],
        ])
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.empty_cells().len(), CELLS);
        assert!(!board.is_full());
        assert_eq!(board.max_tile(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(4, 3, 8));
        assert_eq!(board.get(4, 3), Some(8));
        assert!(!board.set(5, 0, 2));
        assert!(!board.set(0, 4, 2));
        assert_eq!(board.get(5, 0), None);
        assert_eq!(board.get(0, 4), None);
    }

    #[test]
    fn test_line_orders_follow_direction_of_travel() {
        let board = sample();
        assert_eq!(board.line(Direction::Left, 0).as_slice(), &[2, 0, 0, 4]);
        assert_eq!(board.line(Direction::Right, 0).as_slice(), &[4, 0, 0, 2]);
        assert_eq!(board.line(Direction::Up, 0).as_slice(), &[2, 0, 0, 0, 32]);
        assert_eq!(board.line(Direction::Down, 0).as_slice(), &[32, 0, 0, 0, 2]);
    }

    #[test]
    fn test_set_line_restores_physical_order() {
        let mut board = Board::new();
        board.set_line(Direction::Right, 1, &[2, 4, 0, 0]);
        assert_eq!(board.rows()[1], [0, 0, 4, 2]);

        board.set_line(Direction::Down, 3, &[8, 16, 0, 0, 0]);
        assert_eq!(board.get(4, 3), Some(8));
        assert_eq!(board.get(3, 3), Some(16));
        assert_eq!(board.get(0, 3), Some(0));
    }

    #[test]
    fn test_empty_cells_and_full() {
        let board = sample();
        assert_eq!(board.tile_count(), 6);
        assert_eq!(board.empty_cells().len(), CELLS - 6);
        assert_eq!(board.empty_cells()[0], (0, 1));

        let full = Board::from_rows([[2, 4, 2, 4]; ROWS]);
        assert!(full.is_full());
        assert!(full.empty_cells().is_empty());
    }

    #[test]
    fn test_mirrors_are_involutions() {
        let board = sample();
        assert_eq!(board.mirror_horizontal().rows()[0], [4, 0, 0, 2]);
        assert_eq!(board.mirror_vertical().rows()[0], [32, 0, 0, 2]);
        assert_eq!(board.mirror_horizontal().mirror_horizontal(), board);
        assert_eq!(board.mirror_vertical().mirror_vertical(), board);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample().is_well_formed());
        let mut cells = [[0; COLS]; ROWS];
        cells[2][2] = 3;
        assert!(!Board { cells }.is_well_formed());
    }

    #[test]
    fn test_tile_sum_and_max() {
        let board = sample();
        assert_eq!(board.tile_sum(), 64);
        assert_eq!(board.max_tile(), 32);
    }
}
