//! Key mapping from terminal events to menu actions.

use crate::types::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu actions.
///
/// Digits select by menu code; letters are mnemonics.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char(' ') | KeyCode::Enter => Some(MenuAction::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Some(MenuAction::Reserve),
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(MenuAction::UseReserved)
        }
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MenuAction::SwapFrontTop)
        }
        KeyCode::Char('5') | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(MenuAction::SwapBlock)
        }
        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digit_keys_follow_menu_codes() {
        for action in MenuAction::ALL {
            let ch = char::from(b'0' + action.code());
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(action)
            );
        }
    }

    #[test]
    fn test_mnemonic_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(MenuAction::Reserve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(MenuAction::SwapBlock)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(MenuAction::Play)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('0'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('1'))));
    }
}
