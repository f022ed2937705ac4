//! Spell Said - CLI
//!
//! Listen to a word, spell it, get letter-by-letter feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spell_said::{
    commands::{run_check, run_lookup, run_simple},
    config::GameConfig,
    core::Word,
    game::Session,
    logging,
    output::print_banner,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "spell_said",
    about = "Spell the word you hear. Green: right spot, yellow: wrong spot, gray: not in the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Do not speak; useful without a speech command or in a shared office
    #[arg(short, long, global = true)]
    mute: bool,

    /// Voice that reads the words
    #[arg(long, global = true, default_value = "Fred")]
    voice: String,

    /// Slow voice used for hints
    #[arg(long, global = true, default_value = "Moira")]
    human_voice: String,

    /// Never look up example sentences
    #[arg(long, global = true)]
    offline: bool,

    /// Seconds to wait for the dictionary
    #[arg(long, global = true, default_value = "5")]
    timeout: u64,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    no_banner: bool,

    /// Keep the terminal contents when showing the banner
    #[arg(long, global = true)]
    no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-by-line game (default)
    Simple,

    /// Full-screen game
    Play,

    /// Show the feedback for a guess against a word
    Check {
        /// The word to spell
        word: String,

        /// The attempted spelling
        guess: String,
    },

    /// Look up an example sentence for a word
    Lookup {
        /// Word to look up
        word: String,

        /// Do not mask the word in the sentence
        #[arg(short, long)]
        reveal: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        config.voices.narrator.clone_from(&self.voice);
        config.voices.human.clone_from(&self.human_voice);
        config.voices.enabled = !self.mute;
        config.dictionary.enabled = !self.offline;
        config.dictionary.timeout = Duration::from_secs(self.timeout);
        config.banner.show = !self.no_banner;
        config.banner.clear_screen = !self.no_clear;
        config
    }
}

/// Load the word list based on the -w flag
fn load_words(source: &str) -> Result<Vec<Word>> {
    match source {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);
    logging::init(match command {
        Commands::Play => logging::SCREEN_DEFAULT,
        _ => logging::LINE_DEFAULT,
    });

    config.validate()?;

    match command {
        Commands::Simple => run_simple_command(config, &cli.words),
        Commands::Play => run_play_command(config, &cli.words),
        Commands::Check { word, guess } => run_check(&word, &guess, &config.palette),
        Commands::Lookup { word, reveal } => run_lookup(&word, reveal, &config.dictionary),
    }
}

fn run_simple_command(config: GameConfig, words_source: &str) -> Result<()> {
    let words = load_words(words_source)?;
    if config.banner.show {
        print_banner(&config.banner, env!("CARGO_PKG_DESCRIPTION"))?;
    }

    let mut session = Session::from_config(config, words).context("start game")?;
    run_simple(&mut session)
}

fn run_play_command(config: GameConfig, words_source: &str) -> Result<()> {
    use spell_said::interactive::{App, run_tui};

    let words = load_words(words_source)?;
    let mut session = Session::from_config(config, words).context("start game")?;
    let app = App::new(&mut session)?;
    run_tui(app)
}
