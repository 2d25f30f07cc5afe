//! Line-oriented driver: prints the state and menu, reads one code per line.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::engine::GameSession;
use crate::input::{parse_menu_line, MenuSelection};
use crate::journal::Journal;
use crate::term::{render_menu, render_state};

/// Run the menu loop until quit or end of input.
///
/// Returns the number of actions applied.
pub fn run_plain<R, W, J>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
    journal: &mut Journal<J>,
) -> Result<u32>
where
    R: BufRead,
    W: Write,
    J: Write,
{
    let mut applied = 0u32;
    let mut lines = input.lines();

    loop {
        write!(out, "\n{}", render_state(&session.snapshot()))?;
        write!(out, "\n{}", render_menu(session.variant()))?;
        write!(out, "Enter the action code: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match parse_menu_line(&line?) {
            MenuSelection::Quit => {
                writeln!(out, "\nClosing the piece manager. See you next time!")?;
                break;
            }
            MenuSelection::NotANumber => {
                writeln!(out, "\nInvalid option. Please enter a number.")?;
            }
            MenuSelection::UnknownCode(_) => {
                writeln!(out, "\nInvalid option. Please choose a valid code.")?;
            }
            MenuSelection::Action(action) => {
                let report = session.apply(action);
                journal.record_action(&report, &session.snapshot());
                applied += 1;
                writeln!(out, "\n{}", report.message())?;
            }
        }
    }

    Ok(applied)
}
