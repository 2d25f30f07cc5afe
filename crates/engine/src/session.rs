//! Game session - owns the containers and drives replenishment
//!
//! A session holds one factory, one upcoming queue and one reserve stack. Every
//! menu action maps to a single container or exchange operation; actions that
//! remove the queue front are followed by one refill from the factory so the
//! queue returns to full occupancy.

use crate::core::{PieceFactory, ReserveStack, UpcomingQueue};
use crate::exchange::{swap_block_default, swap_front_top, Exchange};
use crate::report::{ActionReport, Outcome};
use crate::snapshot::SessionSnapshot;
use crate::types::{MenuAction, Piece, Variant, BLOCK_SWAP_LEN};

#[derive(Debug, Clone)]
pub struct GameSession {
    factory: PieceFactory,
    queue: UpcomingQueue,
    stack: ReserveStack,
    variant: Variant,
    seed: u32,
    /// Number of actions applied (including rejected ones).
    actions: u32,
    last_report: Option<ActionReport>,
}

impl GameSession {
    /// Create a session and fill the queue with freshly generated pieces.
    pub fn new(seed: u32, variant: Variant) -> Self {
        let mut session = Self {
            factory: PieceFactory::new(seed),
            queue: UpcomingQueue::new(),
            stack: ReserveStack::new(),
            variant,
            seed,
            actions: 0,
            last_report: None,
        };
        session.seed_queue();
        session
    }

    fn seed_queue(&mut self) {
        while !self.queue.is_full() {
            let piece = self.factory.generate();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }

    pub fn queue(&self) -> &UpcomingQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn actions(&self) -> u32 {
        self.actions
    }

    pub fn last_report(&self) -> Option<&ActionReport> {
        self.last_report.as_ref()
    }

    /// Apply a menu action and report what happened.
    pub fn apply(&mut self, action: MenuAction) -> ActionReport {
        self.actions = self.actions.wrapping_add(1);

        let outcome = if self.variant.allows(action) {
            self.run(action)
        } else {
            Outcome::Unavailable {
                required: Variant::required_for(action),
            }
        };

        let replenished = if outcome.consumed_front() {
            self.replenish()
        } else {
            None
        };

        let report = ActionReport {
            action,
            outcome,
            replenished,
        };
        self.last_report = Some(report);
        report
    }

    fn run(&mut self, action: MenuAction) -> Outcome {
        match action {
            MenuAction::Play => match self.queue.dequeue() {
                Ok(piece) => Outcome::Played(piece),
                Err(err) => Outcome::Failed(err),
            },
            MenuAction::Reserve => match self.queue.dequeue() {
                // A piece drawn while the stack is full is lost, not returned.
                Ok(piece) => match self.stack.push(piece) {
                    Ok(()) => Outcome::Reserved(piece),
                    Err(cause) => Outcome::Discarded { piece, cause },
                },
                Err(err) => Outcome::Failed(err),
            },
            MenuAction::UseReserved => match self.stack.pop() {
                Ok(piece) => Outcome::UsedReserved(piece),
                Err(err) => Outcome::Failed(err),
            },
            MenuAction::SwapFrontTop => match swap_front_top(&mut self.queue, &mut self.stack) {
                Ok(Exchange {
                    from_queue,
                    from_stack,
                }) => Outcome::Swapped {
                    from_queue,
                    from_stack,
                },
                Err(err) => Outcome::Failed(err),
            },
            MenuAction::SwapBlock => match swap_block_default(&mut self.queue, &mut self.stack) {
                Ok(()) => Outcome::BlockSwapped {
                    count: BLOCK_SWAP_LEN,
                },
                Err(err) => Outcome::Failed(err),
            },
        }
    }

    /// Generate and enqueue one piece if the queue has room.
    fn replenish(&mut self) -> Option<Piece> {
        if self.queue.is_full() {
            return None;
        }
        let piece = self.factory.generate();
        self.queue.enqueue(piece).ok().map(|()| piece)
    }

    /// Copy of the state for rendering and logging.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            queue: self.queue.snapshot_in_order(),
            stack: self.stack.snapshot_top_to_base(),
            queue_capacity: self.queue.capacity(),
            stack_capacity: self.stack.capacity(),
            variant: self.variant,
            seed: self.seed,
            next_id: self.factory.next_id(),
            actions: self.actions,
            last_report: self.last_report,
        }
    }
}
