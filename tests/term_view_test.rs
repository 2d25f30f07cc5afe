use tetris_stack::engine::GameSession;
use tetris_stack::term::{render_state, SessionView, Viewport};
use tetris_stack::types::{MenuAction, Variant};

fn screen_text(session: &GameSession, vp: Viewport) -> String {
    let fb = SessionView::default().render(&session.snapshot(), vp);
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn view_shows_containers_and_menu() {
    let session = GameSession::new(1, Variant::Full);
    let text = screen_text(&session, Viewport::new(80, 30));

    assert!(text.contains("TETRIS STACK"));
    assert!(text.contains("UPCOMING  front -> back  5/5"));
    assert!(text.contains("RESERVE  top -> base  0/3"));
    assert!(text.contains("Swap queue front with stack top"));
    assert!(text.contains("Quit"));
    assert!(text.contains("Choose an action."));
}

#[test]
fn view_shows_last_report() {
    let mut session = GameSession::new(1, Variant::Full);
    session.apply(MenuAction::UseReserved);
    let text = screen_text(&session, Viewport::new(100, 30));
    assert!(text.contains("Error: the reserve stack is empty."));
}

#[test]
fn view_draws_container_boxes() {
    let session = GameSession::new(1, Variant::Full);
    let fb = SessionView::default().render(&session.snapshot(), Viewport::new(80, 30));

    // Queue box: 5 slots of 8 columns plus borders, at margin 2 row 4.
    assert_eq!(fb.get(2, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(2 + 41, 4).unwrap().ch, '┐');
    assert_eq!(fb.get(2, 6).unwrap().ch, '└');

    // Stack box: 3 slots, row 9.
    assert_eq!(fb.get(2, 9).unwrap().ch, '┌');
    assert_eq!(fb.get(2 + 25, 9).unwrap().ch, '┐');
}

#[test]
fn unavailable_actions_are_dimmed() {
    let session = GameSession::new(1, Variant::Basic);
    let fb = SessionView::default().render(&session.snapshot(), Viewport::new(80, 30));

    let find_row = |needle: &str| {
        (0..fb.height())
            .find(|y| fb.row_text(*y).contains(needle))
            .unwrap()
    };
    let play = find_row(MenuAction::Play.label());
    let block = find_row(MenuAction::SwapBlock.label());
    assert!(!fb.get(6, play).unwrap().style.dim);
    assert!(fb.get(6, block).unwrap().style.dim);
}

#[test]
fn tiny_viewport_does_not_panic() {
    let session = GameSession::new(1, Variant::Full);
    let fb = SessionView::default().render(&session.snapshot(), Viewport::new(10, 3));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 3);
}

#[test]
fn text_state_matches_snapshot() {
    let mut session = GameSession::new(1, Variant::Full);
    session.apply(MenuAction::Reserve);
    let snap = session.snapshot();
    let text = render_state(&snap);
    let top = snap.stack[0];
    assert!(text.contains(&format!("Stack (top -> base, 1/3): {top}")));
    assert!(text.starts_with("====="));
}
