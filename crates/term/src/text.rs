//! Plain-text rendering for line-oriented terminals and logs.

use std::fmt::Write;

use crate::engine::SessionSnapshot;
use crate::types::{MenuAction, Piece, Variant};

const RULE: &str = "=======================================================================";

/// `[I 0] -> [O 1]`, or `[EMPTY]` when there are no pieces.
pub fn render_piece_row(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "[EMPTY]".to_string();
    }
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{piece}");
    }
    out
}

/// State block: queue front-to-back and stack top-to-base with occupancy.
pub fn render_state(snap: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "CURRENT STATE");
    let _ = writeln!(
        out,
        "Queue (front -> back, {}/{}): {}",
        snap.queue_len(),
        snap.queue_capacity,
        render_piece_row(&snap.queue)
    );
    if snap.variant >= Variant::Reserve {
        let _ = writeln!(
            out,
            "Stack (top -> base, {}/{}): {}",
            snap.stack_len(),
            snap.stack_capacity,
            render_piece_row(&snap.stack)
        );
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Menu of the actions the variant offers, plus quit.
pub fn render_menu(variant: Variant) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available options:");
    let _ = writeln!(out, "Code | Action");
    let _ = writeln!(out, "-----|---------------------------------------------------");
    for action in MenuAction::ALL.iter().filter(|a| variant.allows(**a)) {
        let _ = writeln!(out, "  {}  | {}", action.code(), action.label());
    }
    let _ = writeln!(out, "  0  | Quit");
    let _ = writeln!(out, "----------------------------------------------------------");
    out
}
