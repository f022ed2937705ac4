//! Core domain types for the spelling game
//!
//! This module contains the word type and the per-letter feedback classifier.
//! Everything here is pure: no I/O, no shared state.

mod feedback;
mod word;

pub use feedback::{ClassifyError, Feedback, classify, classify_guess, is_solved};
pub use word::{Word, WordError};
