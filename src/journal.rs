//! JSON-lines action journal.
//!
//! One record per line: a `start` record when the session begins, then one
//! `action` record per applied menu action. Write failures disable the journal
//! and never interrupt the session.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::engine::{ActionReport, Outcome, SessionSnapshot};
use crate::types::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceRecord {
    pub kind: &'static str,
    pub id: u64,
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind.as_str(),
            id: piece.id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record {
    Start {
        ts: u64,
        seed: u32,
        variant: &'static str,
        queue_capacity: usize,
        stack_capacity: usize,
        queue: Vec<PieceRecord>,
    },
    Action {
        ts: u64,
        seq: u64,
        action: &'static str,
        outcome: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<&'static str>,
        pieces: Vec<PieceRecord>,
        #[serde(skip_serializing_if = "Option::is_none")]
        replenished: Option<PieceRecord>,
        queue: Vec<PieceRecord>,
        stack: Vec<PieceRecord>,
    },
}

pub struct Journal<W: Write> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Append to the journal file at `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {path}"))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(512),
        }
    }

    /// A journal that records nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record_start(&mut self, snap: &SessionSnapshot) {
        let record = Record::Start {
            ts: now_ms(),
            seed: snap.seed,
            variant: snap.variant.as_str(),
            queue_capacity: snap.queue_capacity,
            stack_capacity: snap.stack_capacity,
            queue: pieces(&snap.queue),
        };
        self.write(&record);
    }

    /// Record an applied action and the state it left behind.
    pub fn record_action(&mut self, report: &ActionReport, after: &SessionSnapshot) {
        self.seq += 1;
        let record = Record::Action {
            ts: now_ms(),
            seq: self.seq,
            action: report.action.as_str(),
            outcome: report.outcome.as_str(),
            code: report.outcome.error().map(|e| e.code()),
            pieces: outcome_pieces(&report.outcome),
            replenished: report.replenished.map(PieceRecord::from),
            queue: pieces(&after.queue),
            stack: pieces(&after.stack),
        };
        self.write(&record);
    }

    /// Flush and hand back the writer, if still enabled.
    pub fn into_inner(mut self) -> Option<W> {
        let mut out = self.out.take()?;
        out.flush().ok()?;
        Some(out)
    }

    fn write(&mut self, record: &Record) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let result = serde_json::to_writer(&mut self.buf, record)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                out.flush()?;
                Ok(())
            });

        if let Err(e) = result {
            eprintln!("[journal] write failed, journal disabled: {e}");
            self.out = None;
        }
    }
}

fn pieces(list: &[Piece]) -> Vec<PieceRecord> {
    list.iter().copied().map(PieceRecord::from).collect()
}

fn outcome_pieces(outcome: &Outcome) -> Vec<PieceRecord> {
    match *outcome {
        Outcome::Played(p) | Outcome::Reserved(p) | Outcome::UsedReserved(p) => vec![p.into()],
        Outcome::Discarded { piece, .. } => vec![piece.into()],
        Outcome::Swapped {
            from_queue,
            from_stack,
        } => vec![from_queue.into(), from_stack.into()],
        Outcome::BlockSwapped { .. } | Outcome::Failed(_) | Outcome::Unavailable { .. } => {
            Vec::new()
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameSession;
    use crate::types::{MenuAction, Variant};
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_disables_journal() {
        let session = GameSession::new(1, Variant::Full);
        let mut journal = Journal::new(BrokenPipe);
        journal.record_start(&session.snapshot());
        assert!(!journal.is_enabled());
    }

    #[test]
    fn action_records_carry_sequence_numbers() {
        let mut session = GameSession::new(1, Variant::Full);
        let mut journal = Journal::new(Vec::new());
        for _ in 0..2 {
            let report = session.apply(MenuAction::Play);
            journal.record_action(&report, &session.snapshot());
        }

        let bytes = journal.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"seq\":1"));
        assert!(lines[1].contains("\"seq\":2"));
        assert!(lines[1].contains("\"type\":\"action\""));
    }
}
