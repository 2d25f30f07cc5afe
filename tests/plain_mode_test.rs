use std::io::Cursor;

use tetris_stack::engine::GameSession;
use tetris_stack::journal::Journal;
use tetris_stack::plain::run_plain;
use tetris_stack::types::Variant;

fn run(input: &str, variant: Variant) -> (String, u32, GameSession) {
    let mut session = GameSession::new(1, variant);
    let mut out = Vec::new();
    let mut journal = Journal::<Vec<u8>>::disabled();
    let applied = run_plain(&mut session, Cursor::new(input), &mut out, &mut journal).unwrap();
    (String::from_utf8(out).unwrap(), applied, session)
}

#[test]
fn quits_on_zero() {
    let (out, applied, _) = run("0\n1\n", Variant::Full);
    assert_eq!(applied, 0);
    assert!(out.contains("Closing the piece manager"));
    assert!(out.contains("Queue (front -> back, 5/5): "));
    assert!(out.contains("Stack (top -> base, 0/3): [EMPTY]"));
}

#[test]
fn stops_at_end_of_input() {
    let (_, applied, session) = run("1\n2\n", Variant::Full);
    assert_eq!(applied, 2);
    assert_eq!(session.stack().len(), 1);
}

#[test]
fn invalid_input_is_reported_and_skipped() {
    let (out, applied, _) = run("abc\n9\n3\n0\n", Variant::Full);
    assert_eq!(applied, 1);
    assert!(out.contains("Invalid option. Please enter a number."));
    assert!(out.contains("Invalid option. Please choose a valid code."));
    assert!(out.contains("Error: the reserve stack is empty."));
}

#[test]
fn reports_each_outcome() {
    let (out, _, _) = run("1\n2\n2\n2\n2\n4\n5\n0\n", Variant::Full);
    assert!(out.contains("Played [") && out.contains(" 0]."));
    assert!(out.contains("Reserved ["));
    assert!(out.contains("was not reserved and is discarded"));
    assert!(out.contains("Swapped queue ["));
    assert!(out.contains("Swapped the first 3 queue pieces"));
    assert!(out.contains("Stack (top -> base, 3/3): "));
}

#[test]
fn basic_variant_hides_the_stack() {
    let (out, _, _) = run("2\n0\n", Variant::Basic);
    assert!(!out.contains("Stack (top -> base"));
    assert!(out.contains("needs the reserve variant"));
}
