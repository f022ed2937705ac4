//! Spelling word representation
//!
//! A Word stores a lowercase letter sequence along with per-letter counts
//! so the classifier can answer "is this letter anywhere in the word?" without a scan.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase ASCII word of any non-zero length with letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use spell_said::core::Word;
    ///
    /// let word = Word::new(" Hotel ").unwrap();
    /// assert_eq!(word.text(), "hotel");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("h0tel").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
        for ch in text.bytes() {
            *letter_counts.entry(ch).or_default() += 1;
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// Count how many times a letter occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hotel").unwrap();
        assert_eq!(word.text(), "hotel");
        assert_eq!(word.letters(), b"hotel");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("responsibility").unwrap().len(), 14);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("HOTEL").unwrap().text(), "hotel");
        assert_eq!(Word::new("HoTeL").unwrap().text(), "hotel");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  speed\n").unwrap().text(), "speed");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_chars() {
        assert_eq!(Word::new("h0tel"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("don't"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Letter").unwrap();
        assert_eq!(format!("{word}"), "letter");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Word contains invalid characters"
        );
        assert_eq!(
            WordError::Empty.to_string(),
            "Word must contain at least one letter"
        );
    }
}
