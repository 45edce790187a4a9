//! Terminal input module (engine-facing).
//!
//! Turns raw terminal events into [`crate::types::GameAction`]s. Keys map
//! directly; a mouse drag is treated like a touch swipe: the displacement
//! between button-down and button-up picks one of the four directions.

pub mod gesture;
pub mod map;

pub use tui_2048_types as types;

pub use gesture::{direction_from_delta, DragTracker, MIN_DRAG_CELLS};
pub use map::{handle_key_event, handle_mouse_event, should_quit};
