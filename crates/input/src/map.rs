//! Key mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to an intent.
///
/// Presses and terminal auto-repeats both count, so holding an arrow key
/// keeps moving the piece. Releases are ignored.
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Intent::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Intent::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Intent::RotateCw),
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('p' | 'P') => Some(Intent::TogglePause),
        KeyCode::Char('r' | 'R') => Some(Intent::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('L'))),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Intent::RotateCw)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::HardDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(Intent::TogglePause)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(Intent::Restart)
        );
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        assert_eq!(intent_for_key(release(KeyCode::Left)), None);
        assert!(!should_quit(release(KeyCode::Char('q'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
