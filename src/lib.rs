//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_stack::{core,engine,input,term,types}` and
//! hosts the application glue shared by the binary and the integration tests:
//! configuration, the action journal and the plain line-mode driver.

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod config;
pub mod journal;
pub mod plain;
