//! Core piece containers - pure, deterministic, and testable
//!
//! This crate holds the bounded containers of the piece manager and the factory
//! that feeds them. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical piece sequence
//! - **Bounded**: Containers use inline fixed-capacity storage, no heap allocation
//! - **Testable**: Every operation reports failure as a [`PieceError`] value
//!
//! # Module Structure
//!
//! - [`rng`]: LCG and the [`PieceFactory`] that assigns shapes and unique ids
//! - [`queue`]: circular queue of upcoming pieces
//! - [`stack`]: bounded stack of reserved pieces
//! - [`error`]: the error taxonomy shared by containers and exchanges
//!
//! # Invariants
//!
//! - Queue and stack sizes always stay within `0..=N`.
//! - Failed operations never mutate: all checks run before any write.
//! - Piece ids from one factory are strictly increasing, starting at 0.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{PieceFactory, PieceQueue, PieceStack};
//!
//! let mut factory = PieceFactory::new(12345);
//! let mut queue: PieceQueue<5> = PieceQueue::new();
//! let mut stack: PieceStack<3> = PieceStack::new();
//!
//! while !queue.is_full() {
//!     queue.enqueue(factory.generate()).unwrap();
//! }
//!
//! let drawn = queue.dequeue().unwrap();
//! assert_eq!(drawn.id, 0);
//! stack.push(drawn).unwrap();
//! assert_eq!(stack.peek_top().unwrap().id, 0);
//! ```

pub mod error;
pub mod queue;
pub mod rng;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{PieceError, PieceResult};
pub use queue::PieceQueue;
pub use rng::{PieceFactory, SimpleRng};
pub use stack::PieceStack;
pub use types::{QUEUE_CAPACITY, STACK_CAPACITY};

/// Queue sized for a standard session.
pub type UpcomingQueue = PieceQueue<QUEUE_CAPACITY>;

/// Stack sized for a standard session.
pub type ReserveStack = PieceStack<STACK_CAPACITY>;
