//! Turn engine for the outpost adventure.
//!
//! This crate takes an [`Intent`](outpost_parser::Intent) and plays it
//! against a [`WorldState`](outpost_foundation::WorldState):
//!
//! ```text
//! Intent ──▶ Dispatcher ──▶ Talk ─▶ Inventory ─▶ ... ─▶ Quit   (every handler)
//!                │
//!                ├──▶ OutputSink ◀── Ticker                    (narration)
//!                │
//!                └──▶ TurnReport { messages, events, pending }
//! ```
//!
//! # Modules
//!
//! - [`dispatch`] - The [`Dispatcher`] and [`TurnReport`]
//! - [`handler`] - The [`Handler`] trait
//! - [`handlers`] - The standard verb handlers
//! - [`dialogue`] - Conversation state machine
//! - [`effects`] - Events and suspensions a turn can produce
//! - [`ticker`] - The antagonist's periodic warnings
//! - [`sink`] - Thread-safe narration channel
//! - [`narration`] - Shared text formatting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dialogue;
pub mod dispatch;
pub mod effects;
pub mod handler;
pub mod handlers;
pub mod narration;
pub mod sink;
pub mod ticker;

pub use dialogue::{DialogueOutcome, DialogueSession, DialogueState, DialogueTurn, Trigger};
pub use dispatch::{Dispatcher, TurnReport};
pub use effects::{Pending, TickerCommand, TurnEffects, TurnEvent};
pub use handler::Handler;
pub use sink::{NarrationReceiver, OutputSink};
pub use ticker::Ticker;
