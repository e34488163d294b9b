//! Side effects a turn hands back to the dispatcher.
//!
//! Handlers mutate the [`WorldState`](outpost_foundation::WorldState)
//! directly. Everything else a turn can cause (starting or stopping the
//! ticker, suspending the loop, notifying outer layers) is recorded in
//! [`TurnEffects`] and applied by the dispatcher after every handler ran.

use outpost_foundation::RoomId;

use crate::dialogue::{DialogueOutcome, DialogueSession};

// =============================================================================
// Turn Events
// =============================================================================

/// Notifications for layers outside the turn engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player entered a new room.
    RoomChanged(RoomId),
    /// The climactic conversation finished.
    ClimaxReached,
    /// The next line is a door code for this room.
    AwaitingDoorCode(RoomId),
    /// The next line is a dialogue choice.
    AwaitingDialogueChoice,
    /// A conversation ended.
    DialogueEnded(DialogueOutcome),
    /// A document should be shown, as the read and help commands do.
    Document {
        /// Window title.
        title: String,
        /// Document body.
        text: String,
    },
    /// The player asked to save.
    SaveRequested,
    /// The player asked to leave.
    QuitRequested,
}

// =============================================================================
// Pending Continuations
// =============================================================================

/// A suspended turn waiting for the next raw input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pending {
    /// A locked door asked for its code.
    DoorCode {
        /// Room behind the door.
        room: RoomId,
    },
    /// A conversation is waiting for a numbered choice.
    Dialogue(DialogueSession),
}

/// What the ticker should do once the turn is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerCommand {
    /// Start the warnings.
    Start,
    /// The antagonist is dead; stop for good.
    Defeat,
    /// Stop without changing the story.
    Stop,
}

// =============================================================================
// Turn Effects
// =============================================================================

/// Effects collected while handlers run.
#[derive(Clone, Debug, Default)]
pub struct TurnEffects {
    events: Vec<TurnEvent>,
    pending: Option<Pending>,
    ticker: Option<TickerCommand>,
}

impl TurnEffects {
    /// Creates an empty set of effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event.
    pub fn emit(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    /// Suspends the loop. The last suspension of a turn wins.
    pub fn suspend(&mut self, pending: Pending) {
        self.pending = Some(pending);
    }

    /// Asks for the ticker to start.
    pub fn start_ticker(&mut self) {
        self.ticker = Some(TickerCommand::Start);
    }

    /// Asks for the ticker to stop because the antagonist died.
    pub fn defeat_ticker(&mut self) {
        self.ticker = Some(TickerCommand::Defeat);
    }

    /// Asks for the ticker to stop.
    pub fn stop_ticker(&mut self) {
        self.ticker = Some(TickerCommand::Stop);
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// The suspension requested, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The ticker request, if any.
    #[must_use]
    pub fn ticker(&self) -> Option<TickerCommand> {
        self.ticker
    }

    /// Splits into events, suspension, and ticker request.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TurnEvent>, Option<Pending>, Option<TickerCommand>) {
        (self.events, self.pending, self.ticker)
    }
}
