//! One spelling round as an explicit state machine
//!
//! ```text
//! Prompting ──submit──▶ Evaluating ──▶ Correct (terminal)
//!     ▲                     │
//!     └──────── Retry ◀─────┘
//! ```
//!
//! A round knows nothing about speech, terminals or the network. Front-ends
//! call [`Round::submit`] with raw input and act on the returned [`Outcome`].

use crate::config::RETRY_PROMPT;
use crate::core::{Feedback, Word, WordError, classify_guess, is_solved};

/// Where a round currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the first attempt
    Prompting,
    /// An attempt is being checked
    Evaluating,
    /// The last attempt was wrong or unusable; waiting for another
    Retry,
    /// The word was spelled correctly
    Correct,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Spelled correctly; feedback is all exact matches
    Correct(Vec<Feedback>),
    /// Wrong spelling of the right length
    Retry { guess: Word, feedback: Vec<Feedback> },
    /// Empty input: the player wants a hint
    HintRequested,
    /// Input is not a single word
    Invalid(WordError),
    /// Input has a different number of letters than the target
    WrongLength { expected: usize, got: usize },
    /// The round is already over
    AlreadySolved,
}

impl Outcome {
    /// True if the outcome moved the round to `Correct`
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_))
    }
}

/// A single word to spell
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    state: RoundState,
    attempts: usize,
    hints: usize,
    first_prompt: String,
}

impl Round {
    /// Start a round for `target`; `first_prompt` is shown before the first attempt
    #[must_use]
    pub fn new(target: Word, first_prompt: impl Into<String>) -> Self {
        Self {
            target,
            state: RoundState::Prompting,
            attempts: 0,
            hints: 0,
            first_prompt: first_prompt.into(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Number of spelled attempts that were checked against the target
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Number of hints requested so far
    #[must_use]
    pub const fn hints(&self) -> usize {
        self.hints
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, RoundState::Correct)
    }

    /// Prompt text for the current state
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self.state {
            RoundState::Prompting => &self.first_prompt,
            RoundState::Evaluating | RoundState::Retry | RoundState::Correct => RETRY_PROMPT,
        }
    }

    /// What the narrator says to introduce the word
    #[must_use]
    pub fn spoken_command(&self) -> String {
        format!("Spell {}!", self.target)
    }

    /// Check one line of player input
    ///
    /// Input is trimmed and lowercased before checking. Only well-formed,
    /// same-length input reaches the classifier.
    ///
    /// # Examples
    /// ```
    /// use spell_said::core::Word;
    /// use spell_said::game::{Outcome, Round, RoundState};
    ///
    /// let mut round = Round::new(Word::new("hotel").unwrap(), "Spell what Fred said");
    /// assert!(matches!(round.submit("hotle"), Outcome::Retry { .. }));
    /// assert!(matches!(round.submit("hot"), Outcome::WrongLength { expected: 5, got: 3 }));
    /// assert!(round.submit("HOTEL").is_correct());
    /// assert_eq!(round.state(), RoundState::Correct);
    /// ```
    pub fn submit(&mut self, input: &str) -> Outcome {
        if self.is_solved() {
            return Outcome::AlreadySolved;
        }

        self.state = RoundState::Evaluating;
        let outcome = self.evaluate(input);
        self.state = if outcome.is_correct() {
            RoundState::Correct
        } else {
            RoundState::Retry
        };
        outcome
    }

    fn evaluate(&mut self, input: &str) -> Outcome {
        let input = input.trim();
        if input.is_empty() {
            self.hints += 1;
            return Outcome::HintRequested;
        }

        let guess = match Word::new(input) {
            Ok(guess) => guess,
            Err(err) => return Outcome::Invalid(err),
        };

        if guess.len() != self.target.len() {
            return Outcome::WrongLength {
                expected: self.target.len(),
                got: guess.len(),
            };
        }

        self.attempts += 1;
        // Lengths were checked above, so classification cannot fail
        match classify_guess(&self.target, &guess) {
            Ok(feedback) if is_solved(&feedback) => Outcome::Correct(feedback),
            Ok(feedback) => Outcome::Retry { guess, feedback },
            Err(_) => Outcome::WrongLength {
                expected: self.target.len(),
                got: guess.len(),
            },
        }
    }
}
