//! Game configuration
//!
//! Everything the front-ends treat as a constant (style buckets, voice names,
//! prompt texts, dictionary endpoint) lives here and is passed down explicitly.
//! `GameConfig::default()` reproduces the classic game.

use anyhow::{Result, bail};
use colored::Color;
use std::time::Duration;

use crate::core::Feedback;

/// Top-level configuration for a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub palette: StylePalette,
    pub voices: VoiceConfig,
    pub dictionary: DictionaryConfig,
    pub banner: BannerConfig,
    /// Pause after a correct answer before the next word
    pub celebration_pause: Duration,
    /// Pause between the hint introduction and the hint itself
    pub hint_pause: Duration,
}

/// One colour per feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub exact: Color,
    pub present: Color,
    pub absent: Color,
}

/// Which voice speaks a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceRole {
    /// The game host that reads the word and the instructions
    Narrator,
    /// The slow "human" voice used for hints
    Human,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfig {
    pub narrator: String,
    pub human: String,
    /// Rate multiplier for the narrator (1.0 = normal speed)
    pub narrator_rate: f32,
    /// Rate multiplier for the human voice
    pub human_rate: f32,
    /// Speak at all
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub enabled: bool,
    /// Base URL; the word is appended as the last path segment
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    pub show: bool,
    pub clear_screen: bool,
    pub title: String,
    pub tagline: String,
}

impl StylePalette {
    /// Colour for a feedback category
    #[must_use]
    pub const fn color_for(&self, feedback: Feedback) -> Color {
        match feedback {
            Feedback::ExactMatch => self.exact,
            Feedback::PresentElsewhere => self.present,
            Feedback::Absent => self.absent,
        }
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            exact: Color::Green,
            present: Color::Yellow,
            absent: Color::BrightBlack,
        }
    }
}

impl VoiceConfig {
    #[must_use]
    pub fn name_for(&self, role: VoiceRole) -> &str {
        match role {
            VoiceRole::Narrator => &self.narrator,
            VoiceRole::Human => &self.human,
        }
    }

    #[must_use]
    pub const fn rate_for(&self, role: VoiceRole) -> f32 {
        match role {
            VoiceRole::Narrator => self.narrator_rate,
            VoiceRole::Human => self.human_rate,
        }
    }

    /// Prompt shown before the first attempt at a word
    #[must_use]
    pub fn first_prompt(&self) -> String {
        format!("Spell what {} said", self.narrator)
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            narrator: "Fred".to_string(),
            human: "Moira".to_string(),
            narrator_rate: 1.0,
            human_rate: 0.5,
            enabled: true,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            show: true,
            clear_screen: true,
            title: "1kwords".to_string(),
            tagline: "by clidevs".to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: StylePalette::default(),
            voices: VoiceConfig::default(),
            dictionary: DictionaryConfig::default(),
            banner: BannerConfig::default(),
            celebration_pause: Duration::from_secs(2),
            hint_pause: Duration::from_millis(500),
        }
    }
}

/// Prompt shown after a wrong attempt
pub const RETRY_PROMPT: &str = "Try again";

impl GameConfig {
    /// Check values that would otherwise fail later, mid-game
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.voices.narrator.trim().is_empty() {
            bail!("narrator voice name must not be empty");
        }
        if self.voices.human.trim().is_empty() {
            bail!("human voice name must not be empty");
        }
        if !(self.voices.narrator_rate > 0.0 && self.voices.human_rate > 0.0) {
            bail!("speech rates must be > 0");
        }
        if self.dictionary.enabled {
            if self.dictionary.timeout.is_zero() {
                bail!("dictionary timeout must be > 0");
            }
            if !self.dictionary.base_url.starts_with("http") {
                bail!(
                    "dictionary base URL must be http(s): {}",
                    self.dictionary.base_url
                );
            }
        }
        Ok(())
    }
}
