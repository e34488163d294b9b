//! End-to-end tests through the session layer.
//!
//! Tests for the assembled game:
//! - The demo walkthrough, line by line and through the REPL
//! - Content files with their own verbs
//! - The antagonist ticker inside a running session

mod content_tests;
mod ticker_tests;
mod walkthrough_tests;

use outpost_engine::NarrationReceiver;
use outpost_runtime::{Session, SessionConfig};

/// The replayable walkthrough shipped with the demo.
pub const WALKTHROUGH: &str = include_str!("../../demos/walkthrough.txt");

/// A demo session and its narration stream.
pub fn demo_session(config: &SessionConfig) -> (Session, NarrationReceiver) {
    let mut session = Session::demo(config).unwrap_or_else(|e| panic!("demo session: {e}"));
    let narration = session.take_narration().unwrap_or_else(|| panic!("narration taken"));
    (session, narration)
}

/// Commands of a script, without comments and blank lines.
pub fn commands(script: &str) -> impl Iterator<Item = &str> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub fn drain(narration: &mut NarrationReceiver) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(message) = narration.try_recv() {
        messages.push(message);
    }
    messages
}
