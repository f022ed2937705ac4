//! End-to-end game flow with a recording speaker and a canned dictionary

use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spell_said::commands::play;
use spell_said::config::{GameConfig, VoiceRole};
use spell_said::core::{Feedback, Word, classify_guess};
use spell_said::dictionary::ExampleLookup;
use spell_said::game::{Hint, Outcome, RoundState, Session};
use spell_said::speech::Speaker;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Spoken = Arc<Mutex<Vec<(String, VoiceRole)>>>;

struct RecordingSpeaker(Spoken);

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str, role: VoiceRole) -> Result<()> {
        self.0.lock().unwrap().push((text.to_string(), role));
        Ok(())
    }

    fn speak_and_wait(&self, text: &str, role: VoiceRole) -> Result<()> {
        self.speak(text, role)
    }
}

enum CannedLookup {
    Example(&'static str),
    Unknown,
    Broken,
}

impl ExampleLookup for CannedLookup {
    fn fetch_example(&self, _word: &str) -> Result<Option<String>> {
        match self {
            Self::Example(e) => Ok(Some((*e).to_string())),
            Self::Unknown => Ok(None),
            Self::Broken => Err(anyhow!("connection refused")),
        }
    }
}

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.celebration_pause = Duration::ZERO;
    config.hint_pause = Duration::ZERO;
    config
}

fn session_with(word: &str, lookup: CannedLookup) -> (Session, Spoken) {
    let spoken: Spoken = Arc::default();
    let session = Session::new(
        quiet_config(),
        vec![Word::new(word).unwrap()],
        vec!["🦄".to_string()],
        Box::new(RecordingSpeaker(Arc::clone(&spoken))),
        Box::new(lookup),
        StdRng::seed_from_u64(9),
    )
    .unwrap();
    (session, spoken)
}

fn lines(spoken: &Spoken) -> Vec<String> {
    spoken
        .lock()
        .unwrap()
        .iter()
        .map(|(text, _)| text.clone())
        .collect()
}

#[test]
fn classifier_scenarios_through_public_api() {
    use Feedback::{Absent as A, ExactMatch as E, PresentElsewhere as P};
    let check = |word: &str, guess: &str| {
        classify_guess(&Word::new(word).unwrap(), &Word::new(guess).unwrap()).unwrap()
    };

    assert_eq!(check("hotel", "hotel"), vec![E; 5]);
    assert_eq!(check("hotel", "leath")[0], P);
    assert_eq!(
        check("speed", "geese")
            .iter()
            .zip("geese".bytes())
            .filter(|(f, l)| *l == b'e' && **f != A)
            .count(),
        2
    );
    assert_eq!(check("abcde", "edcba"), vec![P, P, E, P, P]);
    assert_eq!(check("abcde", "fghij"), vec![A; 5]);
}

#[test]
fn round_announces_word_and_celebrates() {
    let (mut session, spoken) = session_with("hotel", CannedLookup::Unknown);

    let mut round = session.start_round().unwrap();
    assert_eq!(round.target().text(), "hotel");
    assert_eq!(round.prompt(), "Spell what Fred said");

    assert!(matches!(round.submit("hotle"), Outcome::Retry { .. }));
    session.encourage_retry(&round);
    assert!(round.submit("hotel").is_correct());
    assert_eq!(session.celebrate(), "🦄");

    assert_eq!(
        lines(&spoken),
        ["Spell hotel!", "Try again, Spell hotel!", "Awesome job!"]
    );
    assert!(
        spoken
            .lock()
            .unwrap()
            .iter()
            .all(|(_, role)| *role == VoiceRole::Narrator)
    );
}

#[test]
fn hint_with_example_reads_sentence_in_human_voice() {
    let (mut session, spoken) =
        session_with("hotel", CannedLookup::Example("The hotel was full."));
    let round = session.start_round().unwrap();

    let hint = session.hint_for(&round);
    assert_eq!(
        hint,
        Hint::Example {
            sentence: "The hotel was full.".to_string(),
            masked: "The XXXXX was full.".to_string(),
        }
    );

    session.speak_hint(&round, &hint);
    let spoken = spoken.lock().unwrap();
    assert_eq!(
        spoken[1],
        (
            "Here's how silly humans say it:".to_string(),
            VoiceRole::Narrator
        )
    );
    assert_eq!(
        spoken[2],
        ("The hotel was full.".to_string(), VoiceRole::Human)
    );
}

#[test]
fn hint_without_example_says_the_word() {
    let (mut session, spoken) = session_with("speed", CannedLookup::Unknown);
    let round = session.start_round().unwrap();

    let hint = session.hint_for(&round);
    assert_eq!(hint, Hint::Pronunciation);
    session.speak_hint(&round, &hint);

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken[1].0, "Here's how a pesky human would say it:");
    assert_eq!(spoken[2], ("speed".to_string(), VoiceRole::Human));
}

#[test]
fn failing_dictionary_degrades_to_pronunciation() {
    let (mut session, _) = session_with("speed", CannedLookup::Broken);
    let round = session.start_round().unwrap();
    assert_eq!(session.hint_for(&round), Hint::Pronunciation);
}

#[test]
fn line_game_runs_until_end_of_input() {
    let (mut session, spoken) = session_with("hotel", CannedLookup::Unknown);
    let input = Cursor::new("hot\nleath\n\nhotel\nh0tel\n");

    play(&mut session, input, false).unwrap();

    assert_eq!(
        lines(&spoken),
        [
            // Round 1
            "Spell hotel!",
            "Try again, Spell hotel!",
            "Here's how a pesky human would say it:",
            "hotel",
            "Awesome job!",
            // Round 2 starts, then input runs out
            "Spell hotel!",
        ]
    );
}

#[test]
fn line_game_stops_on_quit_command() {
    let (mut session, spoken) = session_with("hotel", CannedLookup::Unknown);
    play(&mut session, Cursor::new("/quit\nhotel\n"), false).unwrap();
    assert_eq!(lines(&spoken), ["Spell hotel!"]);
}

#[test]
fn round_state_walks_the_state_machine() {
    let (mut session, _) = session_with("speed", CannedLookup::Unknown);
    let mut round = session.start_round().unwrap();
    assert_eq!(round.state(), RoundState::Prompting);

    round.submit("");
    assert_eq!(round.state(), RoundState::Retry);
    assert_eq!(round.prompt(), "Try again");

    round.submit("speed");
    assert_eq!(round.state(), RoundState::Correct);
    assert_eq!(round.submit("speed"), Outcome::AlreadySolved);
}

#[test]
fn empty_word_list_is_rejected() {
    let result = Session::new(
        quiet_config(),
        Vec::new(),
        Vec::new(),
        Box::new(RecordingSpeaker(Arc::default())),
        Box::new(CannedLookup::Unknown),
        StdRng::seed_from_u64(0),
    );
    assert!(result.is_err());
}
