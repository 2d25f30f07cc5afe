//! Parsing of typed menu lines (plain line mode).

use crate::types::MenuAction;

/// What a menu line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Action(MenuAction),
    Quit,
    /// A number that is not a menu code.
    UnknownCode(i64),
    /// Not a number at all.
    NotANumber,
}

/// Parse one line of menu input.
///
/// Accepts a decimal menu code surrounded by optional whitespace.
pub fn parse_menu_line(line: &str) -> MenuSelection {
    let Ok(code) = line.trim().parse::<i64>() else {
        return MenuSelection::NotANumber;
    };

    if code == 0 {
        return MenuSelection::Quit;
    }
    u8::try_from(code)
        .ok()
        .and_then(MenuAction::from_code)
        .map(MenuSelection::Action)
        .unwrap_or(MenuSelection::UnknownCode(code))
}
