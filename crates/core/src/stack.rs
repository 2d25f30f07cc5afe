//! Bounded LIFO of reserved pieces.
//!
//! Backed by an inline `ArrayVec`; its length is the `top` count (the index of
//! the next free slot).

use arrayvec::ArrayVec;

use crate::error::{PieceError, PieceResult};
use crate::types::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStack<const N: usize> {
    slots: ArrayVec<Piece, N>,
}

impl<const N: usize> PieceStack<N> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Place a piece on top.
    pub fn push(&mut self, piece: Piece) -> PieceResult<()> {
        self.slots.try_push(piece).map_err(|_| PieceError::StackFull)
    }

    /// Remove and return the top piece.
    pub fn pop(&mut self) -> PieceResult<Piece> {
        self.slots.pop().ok_or(PieceError::StackEmpty)
    }

    pub fn peek_top(&self) -> PieceResult<Piece> {
        self.slots.last().copied().ok_or(PieceError::StackEmpty)
    }

    /// Piece at logical position `i` from the top (0 is the top).
    pub fn get_from_top(&self, i: usize) -> Option<Piece> {
        let len = self.slots.len();
        if i >= len {
            return None;
        }
        self.slots.get(len - 1 - i).copied()
    }

    /// Mutable access to the slot at logical position `i` from the top.
    ///
    /// Overwriting through this reference relabels a slot; the size never changes.
    pub fn get_mut_from_top(&mut self, i: usize) -> Option<&mut Piece> {
        let len = self.slots.len();
        if i >= len {
            return None;
        }
        self.slots.get_mut(len - 1 - i)
    }

    /// Base-to-top slice of the occupied slots.
    pub fn as_slice(&self) -> &[Piece] {
        &self.slots
    }

    /// Top-to-base view for display.
    pub fn snapshot_top_to_base(&self) -> ArrayVec<Piece, N> {
        self.slots.iter().rev().copied().collect()
    }
}

impl<const N: usize> Default for PieceStack<N> {
    fn default() -> Self {
        Self::new()
    }
}
