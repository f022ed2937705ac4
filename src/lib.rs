//! Spell Said
//!
//! A spelling game for the terminal: a word is spoken aloud, the player types
//! it, and every letter comes back coloured by how close it was.
//!
//! # Quick Start
//!
//! ```rust
//! use spell_said::core::{Feedback, Word, classify_guess};
//!
//! let word = Word::new("speed").unwrap();
//! let guess = Word::new("geese").unwrap();
//!
//! let feedback = classify_guess(&word, &guess).unwrap();
//! assert_eq!(feedback[2], Feedback::ExactMatch);
//! assert_eq!(feedback[4], Feedback::Absent); // SPEED only has two e's
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Round state machine and session
pub mod game;

// Text-to-speech
pub mod speech;

// Example sentence lookups
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic tracing
pub mod logging;
