//! One-shot feedback for a guess against a known word

use crate::config::StylePalette;
use crate::core::{Feedback, Word, classify_guess};
use crate::output::print_feedback_with_emoji;
use anyhow::{Context, Result};

/// Classify `guess` against `word`
///
/// # Errors
///
/// Returns an error if either input is not a word or the lengths differ.
///
/// # Examples
/// ```
/// use spell_said::commands::check_guess;
/// use spell_said::core::Feedback;
///
/// let feedback = check_guess("abcde", "edcba").unwrap();
/// assert_eq!(feedback[2], Feedback::ExactMatch);
/// assert!(check_guess("abcde", "abc").is_err());
/// ```
pub fn check_guess(word: &str, guess: &str) -> Result<Vec<Feedback>> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    Ok(classify_guess(&word, &guess)?)
}

/// Print the coloured feedback for `guess` against `word`
///
/// # Errors
///
/// Returns an error if either input is not a word or the lengths differ.
pub fn run_check(word: &str, guess: &str, palette: &StylePalette) -> Result<()> {
    let feedback = check_guess(word, guess)?;
    let guess = Word::new(guess)?;
    print_feedback_with_emoji(&guess, &feedback, palette);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassifyError;

    #[test]
    fn check_guess_normalizes_case() {
        let feedback = check_guess("Hotel", "HOTEL").unwrap();
        assert!(feedback.iter().all(|&f| f == Feedback::ExactMatch));
    }

    #[test]
    fn check_guess_length_mismatch_keeps_classifier_error() {
        let err = check_guess("hotel", "hot").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ClassifyError>(),
            Some(&ClassifyError::LengthMismatch { word: 5, guess: 3 })
        );
    }

    #[test]
    fn check_guess_rejects_non_words() {
        let err = check_guess("hotel", "h0tel").unwrap_err();
        assert!(err.to_string().contains("invalid guess 'h0tel'"));
    }

    #[test]
    fn run_check_prints() {
        run_check("speed", "geese", &StylePalette::default()).unwrap();
    }
}
