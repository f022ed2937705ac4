//! Text-to-speech through the operating system's speech command
//!
//! macOS ships `say`; elsewhere `espeak` is the common choice. Each utterance is
//! a child process. Starting a new utterance with [`Speaker::speak`] stops the
//! previous one if it is still talking.

use anyhow::{Context, Result, anyhow};
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::config::{VoiceConfig, VoiceRole};

/// Words per minute at rate 1.0
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Something that can read text aloud
pub trait Speaker {
    /// Start speaking and return immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the utterance could not be started.
    fn speak(&self, text: &str, role: VoiceRole) -> Result<()>;

    /// Speak and block until the utterance is finished
    ///
    /// # Errors
    ///
    /// Returns an error if the utterance could not be started or awaited.
    fn speak_and_wait(&self, text: &str, role: VoiceRole) -> Result<()>;
}

/// Speech command flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// macOS `say -v <voice> -r <wpm> <text>`
    Say,
    /// `espeak -s <wpm> <text>`; espeak has no named character voices, so the
    /// configured names are not passed through
    Espeak,
}

impl Backend {
    /// Backend for the platform this binary was built for
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_os = "macos") {
            Self::Say
        } else {
            Self::Espeak
        }
    }

    /// Build the command that speaks `text`
    #[must_use]
    pub fn command(self, voice: &str, rate: f32, text: &str) -> Command {
        let wpm = words_per_minute(rate).to_string();
        let mut cmd = match self {
            Self::Say => {
                let mut cmd = Command::new("say");
                cmd.args(["-v", voice, "-r", &wpm]);
                cmd
            }
            Self::Espeak => {
                let mut cmd = Command::new("espeak");
                cmd.args(["-s", &wpm]);
                cmd
            }
        };
        // `--` keeps text starting with '-' from being read as a flag
        cmd.arg("--").arg(text);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

fn words_per_minute(rate: f32) -> u32 {
    (BASE_WORDS_PER_MINUTE * rate).round().max(1.0) as u32
}

/// Speaks by spawning the platform speech command
pub struct CommandSpeaker {
    backend: Backend,
    voices: VoiceConfig,
    current: Mutex<Option<Child>>,
}

impl CommandSpeaker {
    #[must_use]
    pub fn new(backend: Backend, voices: VoiceConfig) -> Self {
        Self {
            backend,
            voices,
            current: Mutex::new(None),
        }
    }

    fn start(&self, text: &str, role: VoiceRole) -> Result<Child> {
        let mut cmd =
            self.backend
                .command(self.voices.name_for(role), self.voices.rate_for(role), text);
        debug!(backend = ?self.backend, ?role, text, "speaking");
        cmd.spawn()
            .with_context(|| format!("failed to start speech command {:?}", cmd.get_program()))
    }

    fn take_current(&self) -> Result<Option<Child>> {
        let mut current = self
            .current
            .lock()
            .map_err(|_| anyhow!("speech state poisoned"))?;
        Ok(current.take())
    }

    fn stop_current(&self) -> Result<()> {
        if let Some(mut child) = self.take_current()? {
            if child.try_wait().context("poll speech command")?.is_none() {
                debug!("interrupting previous utterance");
                child.kill().context("stop speech command")?;
            }
            child.wait().context("reap speech command")?;
        }
        Ok(())
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str, role: VoiceRole) -> Result<()> {
        self.stop_current()?;
        let child = self.start(text, role)?;
        let mut current = self
            .current
            .lock()
            .map_err(|_| anyhow!("speech state poisoned"))?;
        *current = Some(child);
        Ok(())
    }

    fn speak_and_wait(&self, text: &str, role: VoiceRole) -> Result<()> {
        self.stop_current()?;
        let mut child = self.start(text, role)?;
        let status = child.wait().context("wait for speech command")?;
        if !status.success() {
            warn!(code = ?status.code(), "speech command exited with failure");
        }
        Ok(())
    }
}

/// A speaker that says nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, text: &str, role: VoiceRole) -> Result<()> {
        debug!(?role, text, "muted");
        Ok(())
    }

    fn speak_and_wait(&self, text: &str, role: VoiceRole) -> Result<()> {
        self.speak(text, role)
    }
}

/// Pick a speaker for the configuration
#[must_use]
pub fn from_config(voices: &VoiceConfig) -> Box<dyn Speaker> {
    if voices.enabled {
        Box::new(CommandSpeaker::new(Backend::native(), voices.clone()))
    } else {
        Box::new(SilentSpeaker)
    }
}

/// Speak, logging instead of failing
///
/// Speech is a nicety; a missing speech command should never end the game.
pub fn say_or_warn(speaker: &dyn Speaker, text: &str, role: VoiceRole) {
    if let Err(err) = speaker.speak(text, role) {
        warn!(error = %err, "speech unavailable");
    }
}

/// Blocking variant of [`say_or_warn`]
pub fn say_and_wait_or_warn(speaker: &dyn Speaker, text: &str, role: VoiceRole) {
    if let Err(err) = speaker.speak_and_wait(text, role) {
        warn!(error = %err, "speech unavailable");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn say_command_uses_voice_and_rate() {
        let cmd = Backend::Say.command("Fred", 1.0, "Spell hotel!");
        assert_eq!(cmd.get_program(), "say");
        assert_eq!(
            args(&cmd),
            ["-v", "Fred", "-r", "175", "--", "Spell hotel!"]
        );
    }

    #[test]
    fn espeak_command_uses_rate_only() {
        let cmd = Backend::Espeak.command("Moira", 0.5, "hotel");
        assert_eq!(cmd.get_program(), "espeak");
        assert_eq!(args(&cmd), ["-s", "88", "--", "hotel"]);
    }

    #[test]
    fn words_per_minute_never_zero() {
        assert_eq!(words_per_minute(1.0), 175);
        assert_eq!(words_per_minute(2.0), 350);
        assert_eq!(words_per_minute(0.0), 1);
    }

    #[test]
    fn silent_speaker_always_succeeds() {
        let speaker = SilentSpeaker;
        speaker.speak("Awesome job!", VoiceRole::Narrator).unwrap();
        speaker.speak_and_wait("hotel", VoiceRole::Human).unwrap();
    }

    #[test]
    fn disabled_voices_give_silent_speaker() {
        let voices = VoiceConfig {
            enabled: false,
            ..VoiceConfig::default()
        };
        // Would fail on a machine without a speech command if it were real
        from_config(&voices)
            .speak_and_wait("hello", VoiceRole::Narrator)
            .unwrap();
    }
}
