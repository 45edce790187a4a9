use crate::types::{Phase, TileValue, COLS, ROWS};

/// Read-only view of a game, for renderers and the headless driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub board: [[TileValue; COLS]; ROWS],
    pub score: u32,
    pub best_score: u32,
    pub phase: Phase,
    pub moves: u32,
    pub max_tile: TileValue,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
