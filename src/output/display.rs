//! Display functions for the line-prompt game

use super::formatters::{feedback_to_emoji, styled_guess};
use crate::config::{BannerConfig, StylePalette};
use crate::core::{Feedback, Word};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

/// Print the start-up banner, optionally clearing the screen first
///
/// # Errors
///
/// Returns an error if the terminal cannot be cleared.
pub fn print_banner(banner: &BannerConfig, description: &str) -> Result<()> {
    if banner.clear_screen {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let title = format!(
        " {} {} ",
        banner.title,
        format!("v{}", env!("CARGO_PKG_VERSION")).normal()
    );
    println!(
        "\n{} {}",
        title.black().on_truecolor(0x36, 0xBB, 0x09).bold(),
        banner.tagline.dimmed()
    );
    println!("{}\n", description.italic());
    println!(
        "  {} right spot   {} wrong spot   {} not in the word",
        "■".green(),
        "■".yellow(),
        "■".bright_black()
    );
    println!(
        "  {}\n",
        "Press Enter on an empty line for a hint, type /quit (or Ctrl-D) to leave.".bright_black()
    );
    Ok(())
}

/// Print a guess with per-letter colours
pub fn print_feedback(guess: &Word, feedback: &[Feedback], palette: &StylePalette) {
    println!("{}", styled_guess(guess, feedback, palette));
}

/// Print a guess with per-letter colours and the emoji summary
pub fn print_feedback_with_emoji(guess: &Word, feedback: &[Feedback], palette: &StylePalette) {
    println!(
        "{}  {}",
        styled_guess(guess, feedback, palette),
        feedback_to_emoji(feedback)
    );
}

/// Print a masked example sentence
pub fn print_example(masked: &str) {
    println!("{} {}", "Example:".bold(), masked);
}

/// Print the celebration line: the symbol three times
pub fn print_celebration(emoji: &str) {
    println!("\n{emoji} {emoji} {emoji}\n");
}

/// Print a rejected input message
pub fn print_notice(message: &str) {
    println!("{}", message.bright_red());
}
