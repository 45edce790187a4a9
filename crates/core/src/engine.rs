//! Grid engine - the four directional shift-and-merge transforms
//!
//! Everything here is pure: a board and a direction go in, a new board and
//! the points earned by merges come out. No randomness, no I/O.

use arrayvec::ArrayVec;

use crate::board::{Board, Line};
use crate::types::{Direction, TileValue, MAX_LINE};

/// Result of sliding a board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub board: Board,
    /// Sum of every merged tile produced by this shift
    pub score_gained: u32,
}

impl ShiftResult {
    /// Number of merges that happened (each one removes exactly one tile).
    ///
    /// `before` should be the board that was shifted; any other board gives
    /// the drop in tile count, floored at zero.
    pub fn merges(&self, before: &Board) -> usize {
        before.tile_count().saturating_sub(self.board.tile_count())
    }
}

/// Slide a single line toward its leading end (index 0) and merge pairs.
///
/// Returns the new line, padded with zeros to the input length, and the
/// points earned. A tile produced by a merge is never merged again in the
/// same call, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_line(line: &[TileValue]) -> (Line, u32) {
    debug_assert!(line.len() <= MAX_LINE);

    let tiles: ArrayVec<TileValue, MAX_LINE> =
        line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Line::new();
    let mut score = 0u32;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i] * 2;
            out.push(merged);
            score += merged;
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }

    while out.len() < line.len() {
        out.push(0);
    }

    (out, score)
}

/// Slide and merge every line of `board` in `direction`.
pub fn shift(board: Board, direction: Direction) -> ShiftResult {
    debug_assert!(board.is_well_formed(), "shift on malformed board: {:?}", board);

    let mut next = board;
    let mut score_gained = 0u32;
    for index in 0..Board::line_count(direction) {
        let line = board.line(direction, index);
        let (slid, score) = slide_line(&line);
        next.set_line(direction, index, &slid);
        score_gained += score;
    }

    ShiftResult {
        board: next,
        score_gained,
    }
}

/// True if a swipe in `direction` would move or merge anything.
pub fn can_shift(board: &Board, direction: Direction) -> bool {
    shift(*board, direction).board != *board
}
