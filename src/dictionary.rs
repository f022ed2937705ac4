//! Example sentences from the free dictionary API
//!
//! `GET <base>/<word>` returns a list of entries; the first definition of the
//! first meaning that carries an `example` is used. A 404 means the dictionary
//! does not know the word, which is an expected empty result.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::DictionaryConfig;

const USER_AGENT: &str = concat!("spell_said/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub example: Option<String>,
}

/// Source of example sentences
pub trait ExampleLookup {
    /// Find an example sentence using `word`
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails for a reason other than not knowing the word.
    fn fetch_example(&self, word: &str) -> Result<Option<String>>;
}

/// Blocking HTTP client for the dictionary API
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &DictionaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("build dictionary HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, word)
    }
}

impl ExampleLookup for DictionaryClient {
    fn fetch_example(&self, word: &str) -> Result<Option<String>> {
        let url = self.url_for(word);
        debug!(%url, "fetching example");

        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request {url}"))?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(word, "word not in dictionary");
            return Ok(None);
        }

        let entries: Vec<Entry> = resp
            .error_for_status()
            .with_context(|| format!("request {url}"))?
            .json()
            .context("decode dictionary response")?;

        Ok(first_example(&entries))
    }
}

/// Lookup used with `--offline`: never finds anything
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLookup;

impl ExampleLookup for OfflineLookup {
    fn fetch_example(&self, _word: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Pick a lookup for the configuration
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn from_config(config: &DictionaryConfig) -> Result<Box<dyn ExampleLookup>> {
    if config.enabled {
        Ok(Box::new(DictionaryClient::new(config)?))
    } else {
        Ok(Box::new(OfflineLookup))
    }
}

/// First example among the definitions of the first meaning of the first entry
#[must_use]
pub fn first_example(entries: &[Entry]) -> Option<String> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .iter()
        .find_map(|d| d.example.clone().filter(|e| !e.trim().is_empty()))
}

/// Hide `word` inside `example` so the sentence does not give the spelling away
///
/// The sentence is lowercased, every occurrence of the word becomes a run of
/// `X`s of the same length, and the first letter is capitalised.
///
/// # Examples
/// ```
/// use spell_said::dictionary::mask_word;
///
/// assert_eq!(
///     mask_word("We stayed at a Hotel by the sea.", "hotel"),
///     "We stayed at a XXXXX by the sea."
/// );
/// ```
#[must_use]
pub fn mask_word(example: &str, word: &str) -> String {
    let lowered = example.to_lowercase();
    let word = word.to_lowercase();
    let masked = if word.is_empty() {
        lowered
    } else {
        lowered.replace(&word, &"X".repeat(word.chars().count()))
    };
    crate::output::formatters::capitalize_first(&masked)
}
