//! Simple interactive CLI mode
//!
//! Line-prompt game: the word is spoken, the player types it, coloured
//! feedback is printed, repeat until spelled. Then the next word.

use crate::game::{Hint, Outcome, Session};
use crate::output::{print_celebration, print_example, print_feedback, print_notice};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Lines that end the game instead of being checked as a spelling
const QUIT_COMMANDS: &[&str] = &["/quit", "/exit", ":q"];

/// Run the game on stdin until EOF or a quit command
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing prompts.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    play(session, stdin.lock(), true)
}

/// Run the game reading answers from `input`
///
/// `show_spinner` draws a spinner while an example is fetched.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails, or if no word
/// can be drawn.
pub fn play<R: BufRead>(session: &mut Session, mut input: R, show_spinner: bool) -> Result<()> {
    loop {
        let mut round = session.start_round()?;

        loop {
            let Some(line) = get_user_input(&mut input, round.prompt())? else {
                println!("\n👋 Bye!\n");
                return Ok(());
            };

            if QUIT_COMMANDS.contains(&line.to_lowercase().as_str()) {
                println!("\n👋 Bye!\n");
                return Ok(());
            }

            match round.submit(&line) {
                Outcome::Correct(feedback) => {
                    print_feedback(round.target(), &feedback, &session.config().palette);
                    let emoji = session.celebrate();
                    print_celebration(&emoji);
                    session.pause_after_celebration();
                    break;
                }
                Outcome::Retry { guess, feedback } => {
                    print_feedback(&guess, &feedback, &session.config().palette);
                    session.encourage_retry(&round);
                }
                Outcome::HintRequested => {
                    let hint = if show_spinner {
                        with_spinner("Looking up an example…", || session.hint_for(&round))
                    } else {
                        session.hint_for(&round)
                    };
                    if let Hint::Example { masked, .. } = &hint {
                        print_example(masked);
                    }
                    session.speak_hint(&round, &hint);
                }
                Outcome::Invalid(err) => print_notice(&format!("❌ {err}")),
                Outcome::WrongLength { expected, got } => print_notice(&format!(
                    "❌ The word has {expected} letters, you typed {got}"
                )),
                Outcome::AlreadySolved => break,
            }
        }
    }
}

fn with_spinner<T>(message: &'static str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = work();
    spinner.finish_and_clear();
    result
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("? {prompt}: ");
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read answer")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
