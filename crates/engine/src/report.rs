//! Outcome of one menu action, as seen by drivers and renderers.

use std::fmt;

use crate::core::PieceError;
use crate::types::{MenuAction, Piece, Variant, QUEUE_CAPACITY, STACK_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The front piece was played.
    Played(Piece),
    /// The front piece moved onto the reserve stack.
    Reserved(Piece),
    /// The front piece was drawn but could not be reserved; it is gone.
    Discarded { piece: Piece, cause: PieceError },
    /// The top reserved piece was used.
    UsedReserved(Piece),
    /// Queue front and stack top traded places.
    Swapped { from_queue: Piece, from_stack: Piece },
    /// `count` queue/stack pairs traded places.
    BlockSwapped { count: usize },
    /// The action was rejected; nothing changed.
    Failed(PieceError),
    /// The session variant does not offer the action; nothing changed.
    Unavailable { required: Variant },
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Played(_) => "played",
            Outcome::Reserved(_) => "reserved",
            Outcome::Discarded { .. } => "discarded",
            Outcome::UsedReserved(_) => "usedReserved",
            Outcome::Swapped { .. } => "swapped",
            Outcome::BlockSwapped { .. } => "blockSwapped",
            Outcome::Failed(_) => "failed",
            Outcome::Unavailable { .. } => "unavailable",
        }
    }

    /// Whether the action removed a piece from the queue.
    pub fn consumed_front(&self) -> bool {
        matches!(
            self,
            Outcome::Played(_) | Outcome::Reserved(_) | Outcome::Discarded { .. }
        )
    }

    /// Error behind a failed or lossy outcome.
    pub fn error(&self) -> Option<PieceError> {
        match self {
            Outcome::Failed(err) => Some(*err),
            Outcome::Discarded { cause, .. } => Some(*cause),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_) | Outcome::Unavailable { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub action: MenuAction,
    pub outcome: Outcome,
    /// Piece generated to refill the queue after a consuming action.
    pub replenished: Option<Piece>,
}

impl ActionReport {
    /// User-facing sentence describing the outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Played(piece) => write!(f, "Played {piece}.")?,
            Outcome::Reserved(piece) => write!(f, "Reserved {piece} on top of the stack.")?,
            Outcome::Discarded { piece, .. } => write!(
                f,
                "Stack full ({STACK_CAPACITY}/{STACK_CAPACITY}): {piece} was not reserved and is discarded."
            )?,
            Outcome::UsedReserved(piece) => write!(f, "Used reserved piece {piece}.")?,
            Outcome::Swapped {
                from_queue,
                from_stack,
            } => write!(f, "Swapped queue {from_queue} <-> stack {from_stack}.")?,
            Outcome::BlockSwapped { count } => write!(
                f,
                "Swapped the first {count} queue pieces with the top {count} stack pieces."
            )?,
            Outcome::Failed(err) => write_failure(f, err)?,
            Outcome::Unavailable { required } => write!(
                f,
                "'{}' needs the {} variant.",
                self.action.label(),
                required.as_str()
            )?,
        }

        if let Some(piece) = self.replenished {
            write!(f, " Refill: {piece} added to the back of the queue.")?;
        }
        Ok(())
    }
}

fn write_failure(f: &mut fmt::Formatter<'_>, err: PieceError) -> fmt::Result {
    match err {
        PieceError::QueueEmpty => f.write_str("Error: the queue is empty, no upcoming pieces."),
        PieceError::QueueFull => f.write_str("Error: the queue is full."),
        PieceError::StackEmpty => f.write_str("Error: the reserve stack is empty."),
        PieceError::StackFull => {
            write!(f, "Error: the reserve stack is full (max {STACK_CAPACITY}).")
        }
        PieceError::InsufficientQueueDepth { needed, available } => write!(
            f,
            "Error: the queue has fewer than {needed} pieces ({available}/{QUEUE_CAPACITY}). Block swap not possible."
        ),
        PieceError::InsufficientStackDepth { needed, available } => write!(
            f,
            "Error: the reserve stack has fewer than {needed} pieces ({available}/{STACK_CAPACITY}). Block swap not possible."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn discard_message_mentions_piece() {
        let report = ActionReport {
            action: MenuAction::Reserve,
            outcome: Outcome::Discarded {
                piece: Piece::new(PieceKind::Z, 7),
                cause: PieceError::StackFull,
            },
            replenished: Some(Piece::new(PieceKind::I, 9)),
        };
        let msg = report.message();
        assert!(msg.contains("[Z 7]"), "{msg}");
        assert!(msg.contains("discarded"), "{msg}");
        assert!(msg.contains("[I 9]"), "{msg}");
        assert_eq!(report.outcome.error(), Some(PieceError::StackFull));
        assert!(report.outcome.consumed_front());
    }

    #[test]
    fn depth_failures_report_occupancy() {
        let report = ActionReport {
            action: MenuAction::SwapBlock,
            outcome: Outcome::Failed(PieceError::InsufficientQueueDepth {
                needed: 3,
                available: 2,
            }),
            replenished: None,
        };
        assert_eq!(
            report.message(),
            "Error: the queue has fewer than 3 pieces (2/5). Block swap not possible."
        );

        let report = ActionReport {
            outcome: Outcome::Failed(PieceError::InsufficientStackDepth {
                needed: 3,
                available: 1,
            }),
            ..report
        };
        assert_eq!(
            report.message(),
            "Error: the reserve stack has fewer than 3 pieces (1/3). Block swap not possible."
        );
    }

    #[test]
    fn failed_outcomes_are_not_successes() {
        let failed = Outcome::Failed(PieceError::StackEmpty);
        assert!(!failed.is_success());
        assert!(!failed.consumed_front());
        assert!(!Outcome::Unavailable {
            required: Variant::Full
        }
        .is_success());
        assert!(Outcome::BlockSwapped { count: 3 }.is_success());
    }
}
