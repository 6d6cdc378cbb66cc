//! Key mapping from terminal events to snake events.

use crate::types::{Direction, SnakeEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to snake events.
pub fn handle_key_event(key: KeyEvent) -> Option<SnakeEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Steering
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(SnakeEvent::ArrowKey(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(SnakeEvent::ArrowKey(Direction::Down)),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(SnakeEvent::ArrowKey(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(SnakeEvent::ArrowKey(Direction::Right)),

        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(SnakeEvent::Pause),

        // Restart
        KeyCode::Enter
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('r')
        | KeyCode::Char('R') => Some(SnakeEvent::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
