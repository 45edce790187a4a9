//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules and the game state around them. It has
//! no dependency on the terminal, so it runs the same interactively, headless,
//! and under test.
//!
//! - **Deterministic**: the same seed and the same swipes replay the same game
//! - **Pure engine**: [`engine::shift`] takes a board by value and returns a new one
//! - **Allocation-free**: boards are `Copy`, lines and empty-cell lists live on the stack
//!
//! # Module Structure
//!
//! - [`board`]: 5x4 board with line extraction in any direction
//! - [`engine`]: shift-and-merge transforms and the per-line kernel
//! - [`game_state`]: start, swipe, spawn, and the end-of-game check
//! - [`rng`]: seeded spawn randomness
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Shift**: all tiles slide toward the swiped edge
//! - **Merge**: two equal neighbours (after sliding) combine into their sum,
//!   which is added to the score; a merged tile does not merge again in the same swipe
//! - **Spawn**: after any swipe that changed the board, one `2` (90%) or `4` (10%)
//!   appears in a random empty cell
//! - **No moves left**: reported as soon as a swipe leaves the board full
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, SwipeOutcome};
//! use tui_2048_types::{Direction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start_game();
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! // Some direction always moves the two starting tiles.
//! let moved = Direction::ALL
//!     .iter()
//!     .any(|&d| game.handle_swipe(d) != SwipeOutcome::Unchanged);
//! assert!(moved);
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line};
pub use engine::{can_shift, shift, slide_line, ShiftResult};
pub use game_state::{GameEvent, GameState, SwipeOutcome};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
