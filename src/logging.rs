//! Diagnostic tracing for the game.
//!
//! Game output (prompts, coloured letters, banner) goes to stdout and is not
//! affected by this module. Diagnostics go to stderr and are filtered by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default directive for front-ends that print line by line
pub const LINE_DEFAULT: &str = "warn";

/// Default directive for the full-screen front-end; stderr shares the
/// terminal with the alternate screen
pub const SCREEN_DEFAULT: &str = "off";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `default_directive` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=spell_said=debug spell_said --mute
/// ```
pub fn init(default_directive: &str) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), default_directive);

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

/// Filter from `RUST_LOG` when set and parsable, else from `default_directive`
fn build_filter(env: Option<&str>, default_directive: &str) -> EnvFilter {
    env.filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}
