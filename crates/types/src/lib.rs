//! Shared types and constants for the 2048 game.
//!
//! Everything here is plain data with no dependencies, so it can be used by
//! the core rules, the terminal renderer, and the input adapter alike.
//!
//! # Board Dimensions
//!
//! The board is **5 rows by 4 columns** (not the classic 4x4):
//!
//! - **Rows**: 5 (indexed 0-4, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Tile Values
//!
//! A cell holds `0` when empty, otherwise a power of two >= 2. New tiles are
//! always `2` or `4`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW` | 2 | Common spawn value |
//! | `SPAWN_HIGH` | 4 | Rare spawn value |
//! | `SPAWN_HIGH_PER_TEN` | 1 | Chance of `SPAWN_HIGH`, out of 10 |
//! | `START_TILES` | 2 | Tiles placed when a game starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, COLS, ROWS};
//!
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("sideways"), None);
//!
//! assert_eq!(
//!     GameAction::from_str("up"),
//!     Some(GameAction::Swipe(Direction::Up))
//! );
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//!
//! assert_eq!(ROWS, 5);
//! assert_eq!(COLS, 4);
//! ```

/// Board height in cells (5 rows)
pub const ROWS: usize = 5;

/// Board width in cells (4 columns)
pub const COLS: usize = 4;

/// Total number of cells on the board
pub const CELLS: usize = ROWS * COLS;

/// Longest line the engine ever slides (a column on this board)
pub const MAX_LINE: usize = if ROWS > COLS { ROWS } else { COLS };

/// Common spawn value
pub const SPAWN_LOW: TileValue = 2;

/// Rare spawn value
pub const SPAWN_HIGH: TileValue = 4;

/// Chance of spawning `SPAWN_HIGH`, out of 10
pub const SPAWN_HIGH_PER_TEN: u32 = 1;

/// Tiles placed on an empty board when a game starts
pub const START_TILES: usize = 2;

/// Content of one board cell. `0` is empty.
pub type TileValue = u32;

/// Returns true for values a cell may legally hold: `0` or a power of two >= 2.
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// ```
#[inline]
pub fn is_valid_tile(value: TileValue) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Swipe direction: the axis and sense along which tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction (case-insensitive). Unknown names are rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for `Left`/`Right`, which slide rows. `Up`/`Down` slide columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Player actions accepted by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge all tiles in a direction
    Swipe(Direction),
    /// Throw away the current game and start a new one
    Restart,
}

impl GameAction {
    /// Parse an action from its command name.
    ///
    /// Directions map to swipes; `"restart"` (or `"new"`) maps to restart.
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(direction) = Direction::from_str(s) {
            return Some(GameAction::Swipe(direction));
        }
        match s.trim().to_lowercase().as_str() {
            "restart" | "new" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Swipe(d) => d.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No game has been started yet
    #[default]
    Idle,
    /// A game is in progress
    Playing,
    /// The board filled up after a swipe; the final board is still shown
    Over,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Over => "over",
        }
    }
}
