//! Per-letter feedback classification
//!
//! Each letter of a guess is classified against the target word as one of:
//! - `ExactMatch` (green): same letter at the same position
//! - `PresentElsewhere` (yellow): letter occurs elsewhere in the word and has not
//!   been claimed by an earlier guess position or an exact match
//! - `Absent` (gray): letter not in the word, or every occurrence is already claimed
//!
//! Duplicate letters follow the usual word-guessing rules: each occurrence in the
//! target satisfies at most one non-`Absent` classification, exact matches first,
//! then guess positions from left to right.

use super::Word;
use thiserror::Error;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    ExactMatch,
    PresentElsewhere,
    Absent,
}

/// Invalid arguments passed to the classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("guess has {guess} letters but the word has {word}")]
    LengthMismatch { word: usize, guess: usize },
    #[error("index {index} is out of range for a {len}-letter guess")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Feedback {
    /// Square glyph for this feedback
    ///
    /// # Examples
    /// ```
    /// use spell_said::core::Feedback;
    ///
    /// assert_eq!(Feedback::ExactMatch.to_emoji(), '🟩');
    /// assert_eq!(Feedback::Absent.to_emoji(), '⬜');
    /// ```
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::ExactMatch => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// True for `ExactMatch` and `PresentElsewhere`
    #[inline]
    #[must_use]
    pub const fn claims_letter(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Classify the guessed letter at `index` against `word`
///
/// # Algorithm
/// 1. A letter at its exact position is always `ExactMatch`.
/// 2. Otherwise, for the letter `L = guess[index]`, count the word positions
///    holding `L` that the guess did not exactly match (`wrong_word`), and the
///    guess positions up to `index` holding `L` that are not exact matches
///    (`wrong_guess`). The letter is `PresentElsewhere` when its rank among the
///    unmatched `L`s of the guess fits within the unmatched `L`s of the word.
/// 3. Anything else is `Absent`.
///
/// # Errors
/// Returns `ClassifyError` if the lengths differ or `index` is out of range.
///
/// # Examples
/// ```
/// use spell_said::core::{Feedback, Word, classify};
///
/// let word = Word::new("speed").unwrap();
/// let guess = Word::new("geese").unwrap();
///
/// assert_eq!(classify(&word, &guess, 1).unwrap(), Feedback::PresentElsewhere);
/// assert_eq!(classify(&word, &guess, 2).unwrap(), Feedback::ExactMatch);
/// assert_eq!(classify(&word, &guess, 4).unwrap(), Feedback::Absent);
/// ```
pub fn classify(word: &Word, guess: &Word, index: usize) -> Result<Feedback, ClassifyError> {
    check_lengths(word, guess)?;
    if index >= guess.len() {
        return Err(ClassifyError::IndexOutOfRange {
            index,
            len: guess.len(),
        });
    }

    Ok(classify_unchecked(word, guess, index))
}

/// Classify every letter of `guess`, in order
///
/// # Errors
/// Returns `ClassifyError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use spell_said::core::{Feedback, Word, classify_guess, is_solved};
///
/// let word = Word::new("abcde").unwrap();
/// let feedback = classify_guess(&word, &Word::new("fghij").unwrap()).unwrap();
/// assert!(feedback.iter().all(|&f| f == Feedback::Absent));
///
/// let feedback = classify_guess(&word, &word).unwrap();
/// assert!(is_solved(&feedback));
/// ```
pub fn classify_guess(word: &Word, guess: &Word) -> Result<Vec<Feedback>, ClassifyError> {
    check_lengths(word, guess)?;

    if !guess.letters().iter().any(|&l| word.has_letter(l)) {
        return Ok(vec![Feedback::Absent; guess.len()]);
    }

    Ok((0..guess.len())
        .map(|i| classify_unchecked(word, guess, i))
        .collect())
}

/// True when every letter was an exact match
#[must_use]
pub fn is_solved(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|&f| f == Feedback::ExactMatch)
}

fn check_lengths(word: &Word, guess: &Word) -> Result<(), ClassifyError> {
    if word.len() == guess.len() {
        Ok(())
    } else {
        Err(ClassifyError::LengthMismatch {
            word: word.len(),
            guess: guess.len(),
        })
    }
}

// Caller guarantees equal lengths and index < len.
fn classify_unchecked(target: &Word, attempt: &Word, index: usize) -> Feedback {
    let (word, guess) = (target.letters(), attempt.letters());
    let letter = guess[index];
    if word[index] == letter {
        return Feedback::ExactMatch;
    }
    if target.count_of(letter) == 0 {
        return Feedback::Absent;
    }

    let mut wrong_word = 0usize;
    let mut wrong_guess = 0usize;

    // Allow: both slices are indexed at i and compared against index
    #[allow(clippy::needless_range_loop)]
    for i in 0..word.len() {
        // Unmatched occurrences of the letter in the word
        if word[i] == letter && guess[i] != letter {
            wrong_word += 1;
        }
        // Unmatched occurrences in the guess, up to and including this one
        if i <= index && guess[i] == letter && word[i] != letter {
            wrong_guess += 1;
        }

        if i >= index {
            if wrong_guess == 0 {
                break;
            }
            if wrong_guess <= wrong_word {
                return Feedback::PresentElsewhere;
            }
        }
    }

    Feedback::Absent
}
