//! Circular queue of upcoming pieces.
//!
//! Fixed-capacity ring buffer: `front` is the slot read by the next dequeue,
//! `back` the slot written by the next enqueue, both advancing modulo `N`.
//! Storage is inline; nothing here allocates.

use arrayvec::ArrayVec;

use crate::error::{PieceError, PieceResult};
use crate::types::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const N: usize> {
    slots: [Option<Piece>; N],
    front: usize,
    back: usize,
    len: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            front: 0,
            back: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Physical slot index of the piece at the front.
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Physical slot index the next enqueue writes to.
    pub fn back_index(&self) -> usize {
        self.back
    }

    /// Append a piece at the back.
    pub fn enqueue(&mut self, piece: Piece) -> PieceResult<()> {
        if self.is_full() {
            return Err(PieceError::QueueFull);
        }

        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the piece at the front.
    pub fn dequeue(&mut self) -> PieceResult<Piece> {
        if self.is_empty() {
            return Err(PieceError::QueueEmpty);
        }

        let Some(piece) = self.slots[self.front].take() else {
            return Err(PieceError::QueueEmpty);
        };
        self.front = (self.front + 1) % N;
        self.len -= 1;
        Ok(piece)
    }

    /// Piece at the front, without removing it.
    pub fn peek_front(&self) -> PieceResult<Piece> {
        self.get(0).ok_or(PieceError::QueueEmpty)
    }

    /// Piece at logical position `i` from the front.
    pub fn get(&self, i: usize) -> Option<Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.front + i) % N]
    }

    /// Mutable access to the slot at logical position `i` from the front.
    ///
    /// Overwriting through this reference relabels a slot; the size never changes.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.front + i) % N].as_mut()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % N])
    }

    /// Front-to-back view for display.
    ///
    /// This is stack-only and does not allocate.
    pub fn snapshot_in_order(&self) -> ArrayVec<Piece, N> {
        self.iter().collect()
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
