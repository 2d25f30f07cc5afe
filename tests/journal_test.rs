use serde_json::Value;

use tetris_stack::engine::GameSession;
use tetris_stack::journal::Journal;
use tetris_stack::types::{MenuAction, Variant};

fn journal_lines(actions: &[MenuAction]) -> Vec<Value> {
    let mut session = GameSession::new(11, Variant::Full);
    let mut journal = Journal::new(Vec::new());
    journal.record_start(&session.snapshot());
    for action in actions {
        let report = session.apply(*action);
        journal.record_action(&report, &session.snapshot());
    }

    let bytes = journal.into_inner().unwrap();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn start_record_describes_session() {
    let lines = journal_lines(&[]);
    assert_eq!(lines.len(), 1);

    let start = &lines[0];
    assert_eq!(start["type"], "start");
    assert_eq!(start["seed"], 11);
    assert_eq!(start["variant"], "full");
    assert_eq!(start["queue_capacity"], 5);
    assert_eq!(start["stack_capacity"], 3);
    let queue = start["queue"].as_array().unwrap();
    assert_eq!(queue.len(), 5);
    assert_eq!(queue[0]["id"], 0);
    assert!(queue[0]["kind"].as_str().unwrap().len() == 1);
}

#[test]
fn action_records_capture_outcome_and_state() {
    let lines = journal_lines(&[MenuAction::Reserve, MenuAction::UseReserved, MenuAction::UseReserved]);
    assert_eq!(lines.len(), 4);

    let reserve = &lines[1];
    assert_eq!(reserve["type"], "action");
    assert_eq!(reserve["seq"], 1);
    assert_eq!(reserve["action"], "reserve");
    assert_eq!(reserve["outcome"], "reserved");
    assert_eq!(reserve["pieces"][0]["id"], 0);
    assert_eq!(reserve["replenished"]["id"], 5);
    assert_eq!(reserve["stack"].as_array().unwrap().len(), 1);
    assert!(reserve.get("code").is_none());

    let used = &lines[2];
    assert_eq!(used["outcome"], "usedReserved");
    assert!(used.get("replenished").is_none());

    let failed = &lines[3];
    assert_eq!(failed["outcome"], "failed");
    assert_eq!(failed["code"], "stack_empty");
    assert_eq!(failed["pieces"].as_array().unwrap().len(), 0);
}

#[test]
fn discard_records_error_code() {
    let lines = journal_lines(&[MenuAction::Reserve; 4]);
    let discard = &lines[4];
    assert_eq!(discard["outcome"], "discarded");
    assert_eq!(discard["code"], "stack_full");
    assert_eq!(discard["pieces"][0]["id"], 3);
}

#[test]
fn disabled_journal_records_nothing() {
    let session = GameSession::new(1, Variant::Full);
    let mut journal = Journal::<Vec<u8>>::disabled();
    journal.record_start(&session.snapshot());
    assert!(!journal.is_enabled());
    assert!(journal.into_inner().is_none());
}
