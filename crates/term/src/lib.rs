//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer and flushes it
//! to the terminal with crossterm. The core never depends on this crate; it
//! only reads snapshots.
//!
//! - `fb`: styled character grid
//! - `game_view`: snapshot to framebuffer (pure, testable)
//! - `renderer`: framebuffer to terminal (full redraw, then diffs)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
