//! Key and mouse mapping from terminal events to game actions.

use crate::gesture::DragTracker;
use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(GameAction::Swipe(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(GameAction::Swipe(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(GameAction::Swipe(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(GameAction::Swipe(Direction::Down))
        }

        KeyCode::Char('r' | 'R' | 'n' | 'N') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Feed a mouse event to the drag tracker; a finished drag becomes a swipe.
pub fn handle_mouse_event(drag: &mut DragTracker, event: MouseEvent) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            drag.press(event.column, event.row);
            None
        }
        MouseEventKind::Up(MouseButton::Left) => drag
            .release(event.column, event.row)
            .map(GameAction::Swipe),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
