//! Terminal input module.
//!
//! This module is intentionally independent of any session state. It maps
//! `crossterm` key events and typed menu lines into [`crate::types::MenuAction`]s.

pub mod line;
pub mod map;

pub use tetris_stack_types as types;

pub use line::{parse_menu_line, MenuSelection};
pub use map::{handle_key_event, should_quit};
