//! SessionView: maps an engine `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::engine::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MenuAction, Piece, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Layout of the piece manager screen.
pub struct SessionView {
    /// Columns per container slot (including its separator).
    slot_w: u16,
    /// Left margin.
    margin: u16,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            slot_w: 8,
            margin: 2,
        }
    }
}

const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FRAME: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).dim();

impl SessionView {
    pub fn new(slot_w: u16) -> Self {
        Self {
            slot_w: slot_w.max(6),
            ..Self::default()
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let x = self.margin;
        let mut y = 1;

        let end = fb.put_str(x, y, "TETRIS STACK", LABEL);
        let end = fb.put_str(end + 3, y, "variant ", VALUE.dim());
        let end = fb.put_str(end, y, snap.variant.as_str(), VALUE);
        let end = fb.put_str(end + 3, y, "seed ", VALUE.dim());
        fb.put_u32(end, y, snap.seed, VALUE);
        y += 2;

        y = self.draw_container(
            fb,
            x,
            y,
            "UPCOMING  front -> back",
            &snap.queue,
            snap.queue_capacity,
        );
        y += 1;
        y = self.draw_container(
            fb,
            x,
            y,
            "RESERVE  top -> base",
            &snap.stack,
            snap.stack_capacity,
        );
        y += 1;

        fb.put_str(x, y, "ACTIONS", LABEL);
        y += 1;
        for action in MenuAction::ALL {
            let style = if snap.variant.allows(action) {
                VALUE
            } else {
                VALUE.dim()
            };
            fb.put_u32(x + 1, y, action.code() as u32, LABEL);
            fb.put_str(x + 4, y, action.label(), style);
            y += 1;
        }
        fb.put_str(x + 1, y, "0", LABEL);
        fb.put_str(x + 4, y, "Quit", VALUE);
        y += 2;

        match snap.last_report {
            Some(report) => {
                let style = if report.outcome.is_success() {
                    CellStyle::fg(Rgb::new(120, 220, 140))
                } else {
                    CellStyle::fg(Rgb::new(230, 110, 110))
                };
                let _ = write!(fb.writer(x, y, style), "{report}");
            }
            None => {
                fb.put_str(x, y, "Choose an action.", VALUE.dim());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title line, then a boxed row of `capacity` slots. Returns the next free row.
    fn draw_container(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        title: &str,
        pieces: &[Piece],
        capacity: usize,
    ) -> u16 {
        let end = fb.put_str(x, y, title, LABEL);
        let end = fb.put_u32(end + 2, y, pieces.len() as u32, VALUE);
        let end = fb.put_str(end, y, "/", VALUE);
        fb.put_u32(end, y, capacity as u32, VALUE);

        let box_w = (capacity as u16) * self.slot_w + 2;
        fb.draw_box(x, y + 1, box_w, 3, FRAME);

        for slot in 0..capacity {
            let sx = x + 1 + (slot as u16) * self.slot_w;
            match pieces.get(slot) {
                Some(piece) => self.draw_piece(fb, sx, y + 2, *piece),
                None => {
                    fb.put_char(sx + self.slot_w / 2, y + 2, '·', EMPTY);
                }
            }
        }
        y + 4
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Piece) {
        let style = CellStyle {
            fg: Rgb::new(20, 20, 30),
            bg: piece_color(piece.kind),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x + 1, y, self.slot_w - 2, 1, ' ', style);
        fb.put_char(x + 2, y, piece.kind.letter(), style);
        fb.put_u64(x + 4, y, piece.id, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameSession;
    use crate::types::Variant;

    #[test]
    fn piece_slot_shows_letter_and_id() {
        let snap = GameSession::new(1, Variant::Full).snapshot();
        let fb = SessionView::default().render(&snap, Viewport::new(80, 30));

        // Queue box starts on row 4; its first slot is at x = margin + 1.
        let row = fb.row_text(5);
        let first = snap.queue[0];
        let expected = format!("{} 0", first.kind.letter());
        assert!(row.contains(&expected), "{row:?}");
    }
}
