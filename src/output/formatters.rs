//! Formatting utilities for terminal output

use crate::config::StylePalette;
use crate::core::{Feedback, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_emoji()).collect()
}

/// A single guessed letter in its feedback colour
#[must_use]
pub fn styled_letter(letter: u8, feedback: Feedback, palette: &StylePalette) -> ColoredString {
    let text = char::from(letter).to_string();
    let styled = text.color(palette.color_for(feedback));
    match feedback {
        Feedback::ExactMatch => styled.bold(),
        Feedback::PresentElsewhere | Feedback::Absent => styled,
    }
}

/// One styled letter per guessed letter, in order
#[must_use]
pub fn styled_letters(
    guess: &Word,
    feedback: &[Feedback],
    palette: &StylePalette,
) -> Vec<ColoredString> {
    guess
        .letters()
        .iter()
        .zip(feedback)
        .map(|(&letter, &f)| styled_letter(letter, f, palette))
        .collect()
}

/// The whole guess, each letter in its feedback colour
#[must_use]
pub fn styled_guess(guess: &Word, feedback: &[Feedback], palette: &StylePalette) -> String {
    styled_letters(guess, feedback, palette)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Uppercase the first character, leave the rest alone
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
