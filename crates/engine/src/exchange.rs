//! Exchanges between the queue and the reserve stack.
//!
//! Exchanges only relabel occupied slots: neither container changes size.
//! Preconditions are checked up front, so an exchange is applied in full or not
//! at all.

use std::mem;

use crate::core::{PieceError, PieceQueue, PieceResult, PieceStack};
use crate::types::{Piece, BLOCK_SWAP_LEN};

/// The two pieces that traded places in a single swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// Piece that was at the queue front (now the stack top).
    pub from_queue: Piece,
    /// Piece that was at the stack top (now the queue front).
    pub from_stack: Piece,
}

/// Exchange the queue front with the stack top.
pub fn swap_front_top<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> PieceResult<Exchange> {
    let from_queue = queue.peek_front()?;
    let from_stack = stack.peek_top()?;

    swap_pair(queue, stack, 0);
    Ok(Exchange {
        from_queue,
        from_stack,
    })
}

/// Exchange the first `n` queue pieces with the top `n` stack pieces.
///
/// Pairing is position-aligned: the i-th piece from the queue front trades
/// with the i-th piece from the stack top.
pub fn swap_block<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
    n: usize,
) -> PieceResult<()> {
    if queue.len() < n {
        return Err(PieceError::InsufficientQueueDepth {
            needed: n,
            available: queue.len(),
        });
    }
    if stack.len() < n {
        return Err(PieceError::InsufficientStackDepth {
            needed: n,
            available: stack.len(),
        });
    }

    // Pairs touch disjoint slots, so swapping in place matches a swap computed
    // from the pre-swap state.
    for i in 0..n {
        swap_pair(queue, stack, i);
    }
    Ok(())
}

/// [`swap_block`] with the standard block length.
pub fn swap_block_default<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> PieceResult<()> {
    swap_block(queue, stack, BLOCK_SWAP_LEN)
}

fn swap_pair<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
    i: usize,
) {
    if let (Some(q), Some(s)) = (queue.get_mut(i), stack.get_mut_from_top(i)) {
        mem::swap(q, s);
    }
}
