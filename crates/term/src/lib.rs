//! Terminal rendering for the piece manager.
//!
//! Renders a [`SessionSnapshot`](crate::engine::SessionSnapshot) two ways:
//!
//! - [`SessionView`] draws into a framebuffer that [`TerminalRenderer`] flushes
//!   to a raw-mode terminal, redrawing only changed runs of cells
//! - [`text`] formats the same state as plain lines for line-oriented output
//!
//! Both renderers are pure with respect to session state and can be unit-tested.

pub mod fb;
pub mod renderer;
pub mod text;
pub mod view;

pub use tetris_stack_engine as engine;
pub use tetris_stack_types as types;

pub use fb::{Cell, CellStyle, CellWriter, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{render_menu, render_piece_row, render_state};
pub use view::{SessionView, Viewport};
