//! Word and celebration lists
//!
//! Provides the embedded lists compiled into the binary and a loader for a
//! substitute word list.

mod embedded;
pub mod loader;

pub use embedded::{EMOJIS, EMOJIS_COUNT, WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn emojis_count_matches_const() {
        assert_eq!(EMOJIS.len(), EMOJIS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn lists_are_not_empty() {
        assert!(WORDS_COUNT > 500, "Expected a substantial word list");
        assert!(EMOJIS_COUNT > 0);
        assert!(EMOJIS.iter().all(|e| !e.trim().is_empty()));
    }
}
