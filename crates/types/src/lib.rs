//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the piece manager.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core containers, session logic, terminal rendering).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held in the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces held in the stack |
//! | `BLOCK_SWAP_LEN` | 3 | Pieces exchanged by a block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{MenuAction, Piece, PieceKind, Variant};
//!
//! let piece = Piece::new(PieceKind::T, 4);
//! assert_eq!(piece.to_string(), "[T 4]");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Menu codes
//! assert_eq!(MenuAction::from_code(2), Some(MenuAction::Reserve));
//! assert!(Variant::Reserve.allows(MenuAction::UseReserved));
//! assert!(!Variant::Reserve.allows(MenuAction::SwapBlock));
//! ```

use std::fmt;

/// Number of slots in the upcoming-pieces queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of slots in the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of position-aligned pairs exchanged by a block swap.
pub const BLOCK_SWAP_LEN: usize = 3;


/// The seven tetromino shape tags
///
/// Only the identity of the shape matters here; board geometry and rotation
/// are out of scope for the piece manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All shape tags, in selection order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Lowercase string representation (journal records)
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Uppercase display letter
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// A piece identity: a shape tag plus a session-unique id.
///
/// Pieces are plain values and are copied between containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.letter(), self.id)
    }
}

/// Actions offered by the piece manager menu
///
/// Each action maps 1:1 to a container or exchange operation. Quitting is not
/// an action; input layers report it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Play the piece at the front of the queue
    Play,
    /// Move the front piece of the queue onto the reserve stack
    Reserve,
    /// Pop the top of the reserve stack
    UseReserved,
    /// Exchange the queue front with the stack top
    SwapFrontTop,
    /// Exchange the first three queue pieces with the top three stack pieces
    SwapBlock,
}

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapFrontTop,
        MenuAction::SwapBlock,
    ];

    /// Numeric menu code (1-5). Code 0 is reserved for quitting.
    pub fn code(&self) -> u8 {
        match self {
            MenuAction::Play => 1,
            MenuAction::Reserve => 2,
            MenuAction::UseReserved => 3,
            MenuAction::SwapFrontTop => 4,
            MenuAction::SwapBlock => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MenuAction::Play),
            2 => Some(MenuAction::Reserve),
            3 => Some(MenuAction::UseReserved),
            4 => Some(MenuAction::SwapFrontTop),
            5 => Some(MenuAction::SwapBlock),
            _ => None,
        }
    }

    /// Parse action from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(MenuAction::Play),
            "reserve" => Some(MenuAction::Reserve),
            "usereserved" => Some(MenuAction::UseReserved),
            "swapfronttop" => Some(MenuAction::SwapFrontTop),
            "swapblock" => Some(MenuAction::SwapBlock),
            _ => None,
        }
    }

    /// camelCase name, used in journal records
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Play => "play",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "useReserved",
            MenuAction::SwapFrontTop => "swapFrontTop",
            MenuAction::SwapBlock => "swapBlock",
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play the front piece (dequeue)",
            MenuAction::Reserve => "Reserve the front piece (queue -> stack)",
            MenuAction::UseReserved => "Use a reserved piece (pop stack)",
            MenuAction::SwapFrontTop => "Swap queue front with stack top",
            MenuAction::SwapBlock => "Swap the first 3 of the queue with the 3 of the stack",
        }
    }
}

/// Capability level of a session.
///
/// The levels are cumulative: each one offers every action of the levels below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Variant {
    /// Queue only: play pieces
    Basic,
    /// Queue plus reserve stack
    Reserve,
    /// Queue, reserve stack and exchange operations
    #[default]
    Full,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Variant::Basic),
            "reserve" => Some(Variant::Reserve),
            "full" => Some(Variant::Full),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Reserve => "reserve",
            Variant::Full => "full",
        }
    }

    /// Lowest variant that offers `action`.
    pub fn required_for(action: MenuAction) -> Self {
        match action {
            MenuAction::Play => Variant::Basic,
            MenuAction::Reserve | MenuAction::UseReserved => Variant::Reserve,
            MenuAction::SwapFrontTop | MenuAction::SwapBlock => Variant::Full,
        }
    }

    pub fn allows(&self, action: MenuAction) -> bool {
        *self >= Variant::required_for(action)
    }
}
