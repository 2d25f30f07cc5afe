//! Piece exchange engine and session driver.
//!
//! - [`exchange`]: swaps between the queue front and the stack top, single or in blocks
//! - [`session`]: [`GameSession`], which owns the containers and applies menu actions
//! - [`report`]: per-action outcomes and their user-facing messages
//! - [`snapshot`]: copies of session state for renderers and logs
//!
//! # Example
//!
//! ```
//! use tetris_stack_engine::{GameSession, Outcome};
//! use tetris_stack_engine::types::{MenuAction, Variant};
//!
//! let mut session = GameSession::new(12345, Variant::Full);
//! let report = session.apply(MenuAction::Reserve);
//! assert!(matches!(report.outcome, Outcome::Reserved(p) if p.id == 0));
//! assert_eq!(report.replenished.map(|p| p.id), Some(5));
//! ```

pub mod exchange;
pub mod report;
pub mod session;
pub mod snapshot;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use exchange::{swap_block, swap_block_default, swap_front_top, Exchange};
pub use report::{ActionReport, Outcome};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
