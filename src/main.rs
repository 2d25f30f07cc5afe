//! Tetris Stack runner (default binary).
//!
//! Full-screen mode uses crossterm for input and the framebuffer renderer;
//! `--plain` runs the line-oriented menu on stdin/stdout.

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::config::{AppConfig, USAGE};
use tetris_stack::engine::GameSession;
use tetris_stack::input::{handle_key_event, should_quit};
use tetris_stack::journal::Journal;
use tetris_stack::plain::run_plain;
use tetris_stack::term::{FrameBuffer, SessionView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().apply_args(&args)?;
    if config.show_help {
        print!("{USAGE}");
        return Ok(());
    }

    let mut journal = match config.log_path.as_deref() {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };

    let mut session = GameSession::new(config.seed, config.variant);
    journal.record_start(&session.snapshot());

    if config.plain {
        eprintln!(
            "[tetris-stack] seed {} variant {}",
            config.seed,
            config.variant.as_str()
        );
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        run_plain(&mut session, stdin.lock(), &mut stdout, &mut journal)?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    journal: &mut Journal<BufWriter<File>>,
) -> Result<()> {
    let view = SessionView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let report = session.apply(action);
                    journal.record_action(&report, &session.snapshot());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
