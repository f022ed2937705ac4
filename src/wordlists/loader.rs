//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and to draw a random entry.

use crate::core::Word;
use anyhow::{Context, Result, bail};
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// Blank lines and lines that are not a single word are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no valid word.
///
/// # Examples
/// ```no_run
/// use spell_said::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("read word list {}", path.display()))?;

    let words = parse_words(&content);
    if words.is_empty() {
        bail!("word list {} contains no usable words", path.display());
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use spell_said::wordlists::loader::words_from_slice;
/// use spell_said::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Uniformly random element, or `None` for an empty list
pub fn pick_random<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["hotel", "speed", "responsibility"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "hotel");
        assert_eq!(words[2].text(), "responsibility");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["hotel", "two words", "", "c4t", "speed"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "hotel");
        assert_eq!(words[1].text(), "speed");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_skips_blank_and_invalid_lines() {
        let words = parse_words("Hotel\n\n  speed  \nnot a word\n42\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["hotel", "speed"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("spell_said_words_{}.txt", std::process::id()));
        fs::write(&path, "apple\nbanana\n\n").unwrap();
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "banana");
    }

    #[test]
    fn load_from_file_rejects_unusable_list() {
        let path =
            std::env::temp_dir().join(format!("spell_said_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n123\n").unwrap();
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn pick_random_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert!(pick_random(&empty, &mut rng).is_none());
    }

    #[test]
    fn pick_random_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked = pick_random(&items, &mut rng).unwrap();
            let idx = items.iter().position(|i| i == picked).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
    }
}
