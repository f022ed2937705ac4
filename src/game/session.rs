//! Everything a round needs from the outside world
//!
//! A `Session` owns the word and celebration lists, the speaker and the
//! dictionary lookup. Front-ends drive it; it never prints.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use tracing::{debug, warn};

use super::Round;
use crate::config::{GameConfig, VoiceRole};
use crate::core::Word;
use crate::dictionary::{self, ExampleLookup, mask_word};
use crate::speech::{self, Speaker, say_and_wait_or_warn, say_or_warn};
use crate::wordlists::{EMOJIS, loader::pick_random};

const FALLBACK_EMOJI: &str = "🎉";

/// What the player gets after asking for help
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// An example sentence; `masked` has the word replaced by `X`s for display
    Example { sentence: String, masked: String },
    /// No example was found; the word is spoken slowly instead
    Pronunciation,
}

pub struct Session {
    config: GameConfig,
    words: Vec<Word>,
    emojis: Vec<String>,
    speaker: Box<dyn Speaker>,
    lookup: Box<dyn ExampleLookup>,
    rng: StdRng,
}

impl Session {
    /// Assemble a session from explicit parts
    ///
    /// # Errors
    ///
    /// Returns an error if the word list is empty or the configuration is invalid.
    pub fn new(
        config: GameConfig,
        words: Vec<Word>,
        emojis: Vec<String>,
        speaker: Box<dyn Speaker>,
        lookup: Box<dyn ExampleLookup>,
        rng: StdRng,
    ) -> Result<Self> {
        config.validate().context("invalid game configuration")?;
        if words.is_empty() {
            bail!("no words to play with");
        }

        Ok(Self {
            config,
            words,
            emojis,
            speaker,
            lookup,
            rng,
        })
    }

    /// Session with the platform speaker, the configured dictionary and the
    /// embedded celebration symbols
    ///
    /// # Errors
    ///
    /// Returns an error if the word list is empty, the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn from_config(config: GameConfig, words: Vec<Word>) -> Result<Self> {
        let speaker = speech::from_config(&config.voices);
        let lookup = dictionary::from_config(&config.dictionary)?;
        let emojis = EMOJIS.iter().map(|&e| e.to_string()).collect();
        Self::new(config, words, emojis, speaker, lookup, StdRng::from_os_rng())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Pick a random word and announce it
    ///
    /// # Errors
    ///
    /// Returns an error if the word list is empty.
    pub fn start_round(&mut self) -> Result<Round> {
        let target = pick_random(&self.words, &mut self.rng)
            .cloned()
            .context("word list is empty")?;
        debug!(word = %target, "new round");

        let round = Round::new(target, self.config.voices.first_prompt());
        say_or_warn(
            self.speaker.as_ref(),
            &round.spoken_command(),
            VoiceRole::Narrator,
        );
        Ok(round)
    }

    /// Ask the dictionary for an example sentence
    ///
    /// Lookup failures are logged and reported as "no example".
    #[must_use]
    pub fn lookup_example(&self, word: &Word) -> Option<String> {
        match self.lookup.fetch_example(word.text()) {
            Ok(example) => example,
            Err(err) => {
                warn!(error = %format!("{err:#}"), word = %word, "example lookup failed");
                None
            }
        }
    }

    /// Look up a hint for the round
    #[must_use]
    pub fn hint_for(&self, round: &Round) -> Hint {
        self.lookup_example(round.target())
            .map_or(Hint::Pronunciation, |sentence| Hint::Example {
                masked: mask_word(&sentence, round.target().text()),
                sentence,
            })
    }

    /// Speak a hint, blocking until the speech is done
    ///
    /// With an example, the narrator introduces it and the human voice reads
    /// it. Without one, the human voice says the word itself.
    pub fn speak_hint(&self, round: &Round, hint: &Hint) {
        let speaker = self.speaker.as_ref();
        let (intro, line) = match hint {
            Hint::Example { sentence, .. } => ("Here's how silly humans say it:", sentence.as_str()),
            Hint::Pronunciation => (
                "Here's how a pesky human would say it:",
                round.target().text(),
            ),
        };
        say_and_wait_or_warn(speaker, intro, VoiceRole::Narrator);
        thread::sleep(self.config.hint_pause);
        say_and_wait_or_warn(speaker, line, VoiceRole::Human);
    }

    /// Repeat the word after a wrong attempt
    pub fn encourage_retry(&self, round: &Round) {
        say_or_warn(
            self.speaker.as_ref(),
            &format!("Try again, {}", round.spoken_command()),
            VoiceRole::Narrator,
        );
    }

    /// Praise a correct answer and pick a celebration symbol
    pub fn celebrate(&mut self) -> String {
        say_or_warn(self.speaker.as_ref(), "Awesome job!", VoiceRole::Narrator);
        pick_random(&self.emojis, &mut self.rng)
            .map_or(FALLBACK_EMOJI, String::as_str)
            .to_string()
    }

    /// Wait after a celebration before the next word
    pub fn pause_after_celebration(&self) {
        thread::sleep(self.config.celebration_pause);
    }
}
