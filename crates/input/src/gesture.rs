//! Swipe gestures from 2D displacements.

use crate::types::Direction;

/// Shortest drag, in terminal cells on either axis, that counts as a swipe.
pub const MIN_DRAG_CELLS: i32 = 1;

/// Pick a direction from a displacement in screen coordinates (y grows down).
///
/// The axis with the larger magnitude wins; equal magnitudes resolve to the
/// vertical axis. A zero vector is not a swipe.
pub fn direction_from_delta(dx: i32, dy: i32) -> Option<Direction> {
    if dx == 0 && dy == 0 {
        return None;
    }
    if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

/// Tracks one mouse drag from button-down to button-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTracker {
    origin: Option<(i32, i32)>,
    min_cells: i32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(MIN_DRAG_CELLS)
    }
}

impl DragTracker {
    pub fn new(min_cells: i32) -> Self {
        Self {
            origin: None,
            min_cells: min_cells.max(1),
        }
    }

    /// Button pressed: remember where. A second press restarts the drag.
    pub fn press(&mut self, x: u16, y: u16) {
        self.origin = Some((x as i32, y as i32));
    }

    /// Button released: the drag's direction, if it was long enough.
    pub fn release(&mut self, x: u16, y: u16) -> Option<Direction> {
        let (ox, oy) = self.origin.take()?;
        let dx = x as i32 - ox;
        let dy = y as i32 - oy;
        if dx.abs() < self.min_cells && dy.abs() < self.min_cells {
            return None;
        }
        direction_from_delta(dx, dy)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
