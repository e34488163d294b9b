//! Integration tests for the outpost_engine crate.
//!
//! Tests for turn processing on the demo outpost:
//! - Dispatcher ordering and narration flow
//! - Story beats driven by the standard handlers
//! - Conversations
//! - The antagonist ticker on a paused clock

mod dialogue_tests;
mod dispatch_tests;
mod story_tests;
mod ticker_tests;

use std::time::Duration;

use outpost_engine::{Dispatcher, NarrationReceiver, OutputSink, Pending, TurnReport};
use outpost_foundation::{RoomId, WorldState};
use outpost_parser::{CommandParser, ParseResult, Scope};

/// The demo world, a standard dispatcher, and the suspended turn if any.
pub struct Game {
    pub world: WorldState,
    pub dispatcher: Dispatcher,
    pub narration: NarrationReceiver,
    pub pending: Option<Pending>,
    parser: CommandParser,
}

impl Game {
    pub fn new() -> Self {
        let world = outpost_runtime::demo::snapshot()
            .into_world()
            .unwrap_or_else(|e| panic!("demo content: {e}"));
        let (sink, narration) = OutputSink::channel();
        Self {
            world,
            dispatcher: Dispatcher::standard(sink),
            narration,
            pending: None,
            parser: CommandParser::default(),
        }
    }

    pub fn at(room: RoomId) -> Self {
        let mut game = Self::new();
        assert!(game.world.enter(room));
        game
    }

    pub fn with_ticker_period(mut self, period: Duration) -> Self {
        self.dispatcher = self.dispatcher.with_ticker_period(period);
        self
    }

    /// Plays one line the way a session would.
    pub fn play(&mut self, input: &str) -> TurnReport {
        let report = match self.pending.take() {
            Some(pending) => self.dispatcher.resume(&mut self.world, pending, input),
            None => match self.parser.parse(input, &Scope::of(&self.world)) {
                ParseResult::Empty => TurnReport::default(),
                ParseResult::Parsed(intent) => self.dispatcher.dispatch(&mut self.world, &intent),
            },
        };
        self.pending.clone_from(&report.pending);
        report
    }

    /// Text of one line.
    pub fn say(&mut self, input: &str) -> String {
        self.play(input).text()
    }

    /// Everything written to the sink so far.
    pub fn drain(&mut self) -> Vec<String> {
        let mut messages = Vec::new();
        while let Ok(message) = self.narration.try_recv() {
            messages.push(message);
        }
        messages
    }
}
