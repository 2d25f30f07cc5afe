//! Error types for container and exchange operations.
//!
//! Every variant is an expected precondition failure. Operations check all
//! preconditions before mutating, so a failed call leaves containers untouched.

/// Errors reported by the queue, the stack and the exchange operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    /// The upcoming-pieces queue has no piece
    #[error("the piece queue is empty")]
    QueueEmpty,

    /// The upcoming-pieces queue is at capacity
    #[error("the piece queue is full")]
    QueueFull,

    /// The reserve stack has no piece
    #[error("the reserve stack is empty")]
    StackEmpty,

    /// The reserve stack is at capacity
    #[error("the reserve stack is full")]
    StackFull,

    /// The queue holds fewer pieces than a block swap needs
    #[error("the piece queue holds {available} pieces, {needed} needed")]
    InsufficientQueueDepth { needed: usize, available: usize },

    /// The stack holds fewer pieces than a block swap needs
    #[error("the reserve stack holds {available} pieces, {needed} needed")]
    InsufficientStackDepth { needed: usize, available: usize },
}

impl PieceError {
    /// Stable machine-readable code (journal records).
    pub fn code(self) -> &'static str {
        match self {
            PieceError::QueueEmpty => "queue_empty",
            PieceError::QueueFull => "queue_full",
            PieceError::StackEmpty => "stack_empty",
            PieceError::StackFull => "stack_full",
            PieceError::InsufficientQueueDepth { .. } => "insufficient_queue_depth",
            PieceError::InsufficientStackDepth { .. } => "insufficient_stack_depth",
        }
    }
}

/// Result type alias for piece operations
pub type PieceResult<T> = Result<T, PieceError>;
