//! One-shot example sentence lookup

use crate::config::DictionaryConfig;
use crate::core::Word;
use crate::dictionary::{DictionaryClient, ExampleLookup};
use crate::output::print_example;
use anyhow::{Context, Result, bail};

/// Fetch and print an example for `word`, masked unless `reveal` is set
///
/// # Errors
///
/// Returns an error if the word is invalid, lookups are disabled, or the
/// request fails for a reason other than an unknown word.
pub fn run_lookup(word: &str, reveal: bool, config: &DictionaryConfig) -> Result<()> {
    if !config.enabled {
        bail!("dictionary lookups are disabled (--offline)");
    }

    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let client = DictionaryClient::new(config)?;
    print_lookup_result(&word, client.fetch_example(word.text())?.as_deref(), reveal);
    Ok(())
}

fn print_lookup_result(word: &Word, example: Option<&str>, reveal: bool) {
    match example {
        Some(example) if reveal => print_example(example),
        Some(example) => print_example(&crate::dictionary::mask_word(example, word.text())),
        None => println!("No example found for '{word}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_lookup_is_an_error() {
        let config = DictionaryConfig {
            enabled: false,
            ..DictionaryConfig::default()
        };
        let err = run_lookup("hotel", false, &config).unwrap_err();
        assert!(err.to_string().contains("--offline"));
    }

    #[test]
    fn invalid_word_is_an_error_before_any_request() {
        let config = DictionaryConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..DictionaryConfig::default()
        };
        assert!(run_lookup("two words", false, &config).is_err());
    }
}
