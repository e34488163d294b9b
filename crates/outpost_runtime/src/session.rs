//! A play session.
//!
//! The session owns the world, the parser, and the dispatcher, and routes
//! each raw line either to a suspended turn or through the parser into a
//! new one. It is also where turn events that concern the outer layers
//! (documents, save and quit requests) are acted on.

use outpost_engine::narration::SEPARATOR;
use outpost_engine::{
    DialogueSession, Dispatcher, NarrationReceiver, OutputSink, Pending, TurnEvent, TurnReport,
};
use outpost_foundation::{CharacterId, Result, WorldState};
use outpost_parser::{CommandParser, ParseResult, Scope};
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::content::GameContent;
use crate::demo;

/// Narration for a save request; persistence is not part of this runtime.
pub const SAVE_UNAVAILABLE: &str = "Salvataggio non disponibile in questa versione.";

/// One player's game.
#[derive(Debug)]
pub struct Session {
    parser: CommandParser,
    dispatcher: Dispatcher,
    world: WorldState,
    pending: Option<Pending>,
    narration: Option<NarrationReceiver>,
    finished: bool,
    climax_reached: bool,
}

impl Session {
    /// Creates a session from content.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the content does
    /// not validate.
    pub fn new(content: GameContent, config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let GameContent { snapshot, commands } = content;
        let world = snapshot.into_world()?;
        let parser = config.parser(commands);
        let (sink, narration) = OutputSink::channel();
        let dispatcher = Dispatcher::standard(sink).with_ticker_period(config.ticker_period);
        info!(
            start = %world.current_room_id(),
            commands = parser.catalog().len(),
            "session created"
        );
        Ok(Self {
            parser,
            dispatcher,
            world,
            pending: None,
            narration: Some(narration),
            finished: false,
            climax_reached: false,
        })
    }

    /// Creates a session on the built-in demo outpost.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn demo(config: &SessionConfig) -> Result<Self> {
        Self::new(demo::content(), config)
    }

    /// Runtime the antagonist ticker is spawned on.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.dispatcher = self.dispatcher.with_runtime(runtime);
        self
    }

    /// Hands over the receiving end of the narration channel.
    ///
    /// Returns `None` after the first call.
    pub fn take_narration(&mut self) -> Option<NarrationReceiver> {
        self.narration.take()
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// The suspended turn waiting for the next line, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Whether the game is over: the player quit, the session was closed,
    /// or the climax was reached and no scripted scene is still open.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished || (self.climax_reached && self.pending.is_none())
    }

    /// Whether the story reached its climax.
    ///
    /// From then on commands are refused. Only a scripted dialogue opened
    /// with [`Session::start_scripted_dialogue`] still takes input.
    #[must_use]
    pub fn climax_reached(&self) -> bool {
        self.climax_reached
    }

    /// Whether the antagonist's warnings are running.
    #[must_use]
    pub fn ticker_running(&self) -> bool {
        self.dispatcher.ticker_running()
    }

    /// Words worth completing at the prompt: verbs and directions.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        let mut words = self.parser.catalog().words();
        words.extend(["nord", "sud", "est", "ovest"].map(String::from));
        words.retain(|w| w.chars().all(|c| !c.is_uppercase()));
        words.sort();
        words.dedup();
        words
    }

    /// Shows the starting room.
    pub fn begin(&mut self) -> String {
        let banner = outpost_engine::narration::room_banner(self.world.current_room());
        self.dispatcher.sink().emit(banner.as_str());
        banner
    }

    /// Plays one line of input.
    ///
    /// Blank or all-stopword lines play no turn. Once the session is
    /// finished every line is ignored. After the climax only a suspended
    /// scripted dialogue is still resumed.
    pub fn handle_line(&mut self, line: &str) -> TurnReport {
        if self.finished {
            return TurnReport::default();
        }
        let report = if let Some(pending) = self.pending.take() {
            debug!(?pending, "resuming suspended turn");
            self.dispatcher.resume(&mut self.world, pending, line)
        } else if self.climax_reached {
            debug!(line, "input after the climax ignored");
            return TurnReport::default();
        } else {
            let parsed = self.parser.parse(line, &Scope::of(&self.world));
            match parsed {
                ParseResult::Empty => return TurnReport::default(),
                ParseResult::Parsed(intent) => self.dispatcher.dispatch(&mut self.world, &intent),
            }
        };
        self.absorb(report)
    }

    /// Opens a conversation outside the verb flow, for scripted scenes.
    ///
    /// Works with characters that stand in no room. Replaces any suspended
    /// turn. When the conversation ends, `continuation` comes back in
    /// [`TurnEvent::DialogueEnded`].
    pub fn start_scripted_dialogue(
        &mut self,
        character: CharacterId,
        continuation: Option<String>,
    ) -> TurnReport {
        let mut session = DialogueSession::new(character);
        if let Some(tag) = continuation {
            session = session.with_continuation(tag);
        }
        info!(%character, "scripted dialogue started");
        let report = self.dispatcher.start_dialogue(&mut self.world, session);
        self.absorb(report)
    }

    /// Ends the session: stops the ticker and closes the narration channel.
    pub fn close(&mut self) {
        self.finished = true;
        self.pending = None;
        self.dispatcher.close();
    }

    fn absorb(&mut self, mut report: TurnReport) -> TurnReport {
        self.pending.clone_from(&report.pending);

        let mut extra = Vec::new();
        for event in &report.events {
            match event {
                TurnEvent::Document { title, text } => extra.push(document(title, text)),
                TurnEvent::SaveRequested => extra.push(SAVE_UNAVAILABLE.to_string()),
                TurnEvent::QuitRequested => {
                    info!("player quit");
                    self.finished = true;
                    self.dispatcher.shutdown();
                }
                TurnEvent::ClimaxReached => {
                    info!("climax reached");
                    self.climax_reached = true;
                    self.dispatcher.shutdown();
                }
                _ => {}
            }
        }
        for message in extra {
            self.dispatcher.sink().emit(message.as_str());
            report.messages.push(message);
        }
        report
    }
}

/// Lays a document out between rules.
fn document(title: &str, text: &str) -> String {
    format!("{}\n{SEPARATOR}\n{text}\n{SEPARATOR}", title.to_uppercase())
}
