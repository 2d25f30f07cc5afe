use arrayvec::ArrayVec;

use crate::report::ActionReport;
use crate::types::{Piece, Variant, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of a session, handed to renderers and the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Upcoming pieces, front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top to base.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub variant: Variant,
    pub seed: u32,
    pub next_id: u64,
    pub actions: u32,
    pub last_report: Option<ActionReport>,
}

impl SessionSnapshot {
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Message for the most recent action, if any.
    pub fn status_message(&self) -> Option<String> {
        self.last_report.map(|r| r.message())
    }
}
