//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::game::{Hint, Outcome, Round, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: &'a mut Session,
    pub round: Round,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub hint_pending: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Spelling,
    /// Word spelled; holds the celebration symbol
    WinCelebration(String),
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Vec<Feedback>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if no word can be drawn.
    pub fn new(session: &'a mut Session) -> Result<Self> {
        let round = session.start_round()?;
        let mut app = Self {
            session,
            round,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Spelling,
            hint_pending: false,
            should_quit: false,
        };
        app.announce_round();
        Ok(app)
    }

    fn announce_round(&mut self) {
        let text = format!(
            "{} ({} letters). Enter on an empty line for a hint, TAB to hear it again.",
            self.round.prompt(),
            self.round.target().len()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Draw a new word and reset the board
    ///
    /// # Errors
    ///
    /// Returns an error if no word can be drawn.
    pub fn next_round(&mut self) -> Result<()> {
        self.round = self.session.start_round()?;
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Spelling;
        self.announce_round();
        Ok(())
    }

    /// Submit the input buffer as an attempt
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.round.submit(&input) {
            Outcome::Correct(feedback) => {
                self.history.push(HistoryEntry {
                    guess: self.round.target().clone(),
                    feedback,
                });
                let emoji = self.session.celebrate();
                let text = win_message(&emoji, &self.round);
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press Enter for the next word or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::WinCelebration(emoji);
            }
            Outcome::Retry { guess, feedback } => {
                self.history.push(HistoryEntry { guess, feedback });
                self.session.encourage_retry(&self.round);
                let prompt = self.round.prompt().to_string();
                self.add_message(&prompt, MessageStyle::Info);
            }
            Outcome::HintRequested => {
                self.hint_pending = true;
                self.add_message("Looking up an example…", MessageStyle::Info);
            }
            Outcome::Invalid(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            Outcome::WrongLength { expected, got } => self.add_message(
                &format!("The word has {expected} letters, you typed {got}"),
                MessageStyle::Error,
            ),
            Outcome::AlreadySolved => {}
        }
    }

    /// Fetch and speak the hint requested by an empty submit
    pub fn resolve_hint(&mut self) {
        self.hint_pending = false;
        let hint = self.session.hint_for(&self.round);
        match &hint {
            Hint::Example { masked, .. } => {
                let text = format!("Example: {masked}");
                self.add_message(&text, MessageStyle::Info);
            }
            Hint::Pronunciation => {
                self.add_message("No example found, listen closely.", MessageStyle::Info);
            }
        }
        self.session.speak_hint(&self.round, &hint);
    }

    /// Say the word again
    pub fn repeat_word(&mut self) {
        self.session.encourage_retry(&self.round);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new round cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::WinCelebration(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.next_round()?,
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Spelling => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.repeat_word(),
                KeyCode::Char(c) => {
                    if c.is_ascii_alphabetic() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Celebration line: the symbol three times, the word and a tally
fn win_message(emoji: &str, round: &Round) -> String {
    let attempts = round.attempts();
    let hints = round.hints();
    let mut text = format!(
        "{emoji} {emoji} {emoji} Awesome job! {} spelled in {attempts} {}",
        round.target().text().to_uppercase(),
        if attempts == 1 { "try" } else { "tries" }
    );
    if hints > 0 {
        text.push_str(&format!(" with {hints} {}", if hints == 1 { "hint" } else { "hints" }));
    }
    text
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Draw the "looking up" message before blocking on the network and speech
        if app.hint_pending {
            app.resolve_hint();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
