//! Turn dispatch.
//!
//! A turn is a flat broadcast: every registered handler sees the intent, in
//! registration order, and returns its narration. The dispatcher then
//! flushes the non-empty messages to the [`OutputSink`], renders the new
//! room if the player moved, and applies the collected [`TurnEffects`].
//!
//! Suspended turns (door codes, dialogue choices) come back through
//! [`Dispatcher::resume`] with the next raw line.

use std::time::Duration;

use outpost_foundation::{RoomId, WorldState};
use outpost_parser::Intent;
use tokio::runtime::Handle;
use tracing::{debug, info, trace, warn};

use crate::dialogue::{DialogueSession, DialogueTurn};
use crate::effects::{Pending, TickerCommand, TurnEffects, TurnEvent};
use crate::handler::Handler;
use crate::handlers;
use crate::narration::{NOT_UNDERSTOOD, room_banner};
use crate::sink::OutputSink;
use crate::ticker::{DEFAULT_PERIOD, Ticker};

const DOOR_UNLOCKED: &str = "La porta è stata sbloccata.";
const WRONG_CODE: &str = "Codice errato. La porta rimane chiusa.";

// =============================================================================
// Turn Report
// =============================================================================

/// What one turn produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Narration, in the order it was written to the sink.
    pub messages: Vec<String>,
    /// Notifications for outer layers.
    pub events: Vec<TurnEvent>,
    /// Set when the next line belongs to a suspended turn.
    pub pending: Option<Pending>,
}

impl TurnReport {
    /// All messages joined by blank lines.
    #[must_use]
    pub fn text(&self) -> String {
        self.messages.join("\n\n")
    }

    /// Whether the turn produced the given event.
    #[must_use]
    pub fn has_event(&self, event: &TurnEvent) -> bool {
        self.events.contains(event)
    }

    /// Whether the turn is waiting for more input.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Runs turns against a world and owns the antagonist ticker.
pub struct Dispatcher {
    handlers: Vec<Box<dyn Handler>>,
    sink: OutputSink,
    runtime: Option<Handle>,
    ticker_period: Duration,
    ticker: Option<Ticker>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handler_names())
            .field("ticker_period", &self.ticker_period)
            .field("ticker", &self.ticker)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers.
    #[must_use]
    pub fn new(sink: OutputSink) -> Self {
        Self {
            handlers: Vec::new(),
            sink,
            runtime: None,
            ticker_period: DEFAULT_PERIOD,
            ticker: None,
        }
    }

    /// Creates a dispatcher with the standard handlers.
    #[must_use]
    pub fn standard(sink: OutputSink) -> Self {
        let mut dispatcher = Self::new(sink);
        for handler in handlers::standard() {
            dispatcher.handlers.push(handler);
        }
        dispatcher
    }

    /// Appends a handler. It runs after every handler registered before it.
    pub fn register(&mut self, handler: impl Handler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Appends a handler, builder style.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.register(handler);
        self
    }

    /// Runtime the ticker is spawned on.
    ///
    /// Without one, the runtime of the calling thread is used if there is
    /// one; otherwise the ticker stays off.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Time between two warnings of the ticker.
    #[must_use]
    pub fn with_ticker_period(mut self, period: Duration) -> Self {
        self.ticker_period = period;
        self
    }

    /// Handler names in call order.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// The narration sink.
    #[must_use]
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Whether the ticker is currently running.
    #[must_use]
    pub fn ticker_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    /// Plays one turn.
    pub fn dispatch(&mut self, world: &mut WorldState, intent: &Intent) -> TurnReport {
        let Some(kind) = intent.kind() else {
            debug!("verb not understood");
            return self.finish(vec![NOT_UNDERSTOOD.to_owned()], TurnEffects::new());
        };
        debug!(command = %kind, "turn started");

        let origin = world.current_room_id();
        let mut effects = TurnEffects::new();
        let mut messages = Vec::new();
        for handler in &self.handlers {
            let text = handler.handle(world, intent, &mut effects);
            if !text.is_empty() {
                trace!(handler = handler.name(), "handler responded");
                messages.push(text);
            }
        }

        let destination = world.current_room_id();
        if destination != origin {
            messages.push(room_banner(world.current_room()));
            effects.emit(TurnEvent::RoomChanged(destination));
        }
        self.finish(messages, effects)
    }

    /// Feeds the next raw line to a suspended turn.
    pub fn resume(&mut self, world: &mut WorldState, pending: Pending, input: &str) -> TurnReport {
        match pending {
            Pending::DoorCode { room } => self.resume_door(world, room, input),
            Pending::Dialogue(session) => self.resume_dialogue(world, session, input),
        }
    }

    /// Checks a door code and walks through on success.
    pub fn resume_door(&mut self, world: &mut WorldState, room: RoomId, input: &str) -> TurnReport {
        let mut effects = TurnEffects::new();
        let unlocked = world.room_mut(room).is_some_and(|r| r.try_unlock(input));
        let messages = if unlocked && world.enter(room) {
            info!(%room, "door unlocked");
            effects.emit(TurnEvent::RoomChanged(room));
            vec![DOOR_UNLOCKED.to_owned(), room_banner(world.current_room())]
        } else {
            debug!(%room, "wrong door code");
            vec![WRONG_CODE.to_owned()]
        };
        self.finish(messages, effects)
    }

    /// Feeds a numbered choice to a conversation.
    pub fn resume_dialogue(
        &mut self,
        world: &mut WorldState,
        mut session: DialogueSession,
        input: &str,
    ) -> TurnReport {
        let turn = session.choose(world, input);
        self.settle_dialogue(session, turn)
    }

    /// Opens a conversation outside the normal verb flow.
    ///
    /// Used by scripted scenes to talk with characters that stand in no
    /// room. The continuation, if any, comes back in
    /// [`TurnEvent::DialogueEnded`].
    pub fn start_dialogue(
        &mut self,
        world: &mut WorldState,
        mut session: DialogueSession,
    ) -> TurnReport {
        let turn = session.start(world);
        self.settle_dialogue(session, turn)
    }

    /// Stops the ticker. Called when the session ends.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Stops the ticker and lets go of the narration channel.
    ///
    /// Once the ticker task has wound down, the receiver sees the channel
    /// close. Later turns still run, but their narration is dropped.
    pub fn close(&mut self) {
        self.shutdown();
        self.sink = OutputSink::disconnected();
    }

    fn settle_dialogue(
        &mut self,
        session: DialogueSession,
        turn: DialogueTurn,
    ) -> TurnReport {
        let mut effects = TurnEffects::new();
        let text = session.settle(turn, &mut effects);
        let messages = if text.is_empty() { Vec::new() } else { vec![text] };
        self.finish(messages, effects)
    }

    fn finish(&mut self, messages: Vec<String>, effects: TurnEffects) -> TurnReport {
        let (events, pending, ticker) = effects.into_parts();
        if let Some(command) = ticker {
            self.apply_ticker(command);
        }
        for message in &messages {
            self.sink.emit(message.as_str());
        }
        if let Some(pending) = &pending {
            debug!(?pending, "turn suspended");
        }
        TurnReport {
            messages,
            events,
            pending,
        }
    }

    fn apply_ticker(&mut self, command: TickerCommand) {
        match command {
            TickerCommand::Start => {
                if self.ticker_running() {
                    return;
                }
                let runtime = self.runtime.clone().or_else(|| Handle::try_current().ok());
                match runtime {
                    Some(runtime) => {
                        self.ticker =
                            Some(Ticker::spawn(&runtime, self.sink.clone(), self.ticker_period));
                    }
                    None => warn!("no async runtime available; antagonist ticker disabled"),
                }
            }
            TickerCommand::Defeat => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.defeat();
                }
            }
            TickerCommand::Stop => self.shutdown(),
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
