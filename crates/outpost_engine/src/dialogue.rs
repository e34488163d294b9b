//! Conversation state machine.
//!
//! A [`DialogueSession`] walks one character's dialogue graph:
//!
//! ```text
//! Inactive ──start──▶ AwaitingChoice(1) ──choose──▶ AwaitingChoice(n)
//!     │                      │                            │
//!     └──no lines────────────┴──terminal or exhausted─────┴──▶ Terminated
//! ```
//!
//! Options are re-filtered from the world on every prompt, so a line chosen
//! once never shows up again. Bad input reprompts without touching state.

use std::fmt::Write as _;

use outpost_foundation::{CharacterId, FIRST_NODE, WorldState};
use tracing::{debug, info};

use crate::effects::{Pending, TurnEffects, TurnEvent};
use crate::narration::SEPARATOR;

/// Heading above the numbered options.
pub const OPTIONS_HEADING: &str = "Opzioni di Dialogo:";

/// Prompt below the numbered options.
pub const CHOICE_PROMPT: &str = "Digita il numero della tua risposta:";

/// Answer to a choice that is not a number.
pub const NOT_A_NUMBER: &str = "Input non valido. Inserisci un numero.";

/// Closing line of every conversation.
pub const DIALOGUE_OVER: &str = "Il dialogo è terminato.";

/// Where a conversation stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueState {
    /// Not started yet.
    Inactive,
    /// Waiting for the player to pick a line at this node.
    AwaitingChoice(u32),
    /// Over.
    Terminated,
}

/// Story beat fired by the end of a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The climactic conversation in the communications room.
    Climax,
    /// A continuation chosen by whoever opened the conversation.
    Continuation(String),
}

/// How a conversation ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogueOutcome {
    /// Nothing follows.
    Terminate,
    /// A story beat follows.
    TerminateAndTrigger(Trigger),
}

/// Result of one step of a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueTurn {
    /// Narration for this step.
    pub text: String,
    /// Set once the conversation is over.
    pub outcome: Option<DialogueOutcome>,
}

impl DialogueTurn {
    fn awaiting(text: String) -> Self {
        Self {
            text,
            outcome: None,
        }
    }

    /// Whether the conversation is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// One conversation with one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueSession {
    character: CharacterId,
    state: DialogueState,
    continuation: Option<String>,
}

impl DialogueSession {
    /// Prepares a conversation with a character.
    #[must_use]
    pub fn new(character: CharacterId) -> Self {
        Self {
            character,
            state: DialogueState::Inactive,
            continuation: None,
        }
    }

    /// Fires `TerminateAndTrigger(Continuation(tag))` at the end, unless the
    /// conversation is the climax.
    #[must_use]
    pub fn with_continuation(mut self, tag: impl Into<String>) -> Self {
        self.continuation = Some(tag.into());
        self
    }

    /// The character spoken to.
    #[must_use]
    pub fn character(&self) -> CharacterId {
        self.character
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Opens the conversation at the first node.
    ///
    /// A character with nothing to say ends the conversation at once.
    pub fn start(&mut self, world: &mut WorldState) -> DialogueTurn {
        debug!(character = %self.character, "dialogue started");
        if world.open_lines(self.character, FIRST_NODE).is_empty() {
            return self.finish(world, String::new());
        }
        self.state = DialogueState::AwaitingChoice(FIRST_NODE);
        DialogueTurn::awaiting(options(world, self.character, FIRST_NODE))
    }

    /// Handles one raw input line while awaiting a choice.
    pub fn choose(&mut self, world: &mut WorldState, input: &str) -> DialogueTurn {
        let node = match self.state {
            DialogueState::Inactive => return self.start(world),
            DialogueState::Terminated => {
                return DialogueTurn {
                    text: String::new(),
                    outcome: Some(DialogueOutcome::Terminate),
                };
            }
            DialogueState::AwaitingChoice(node) => node,
        };

        let open: Vec<_> = world
            .open_lines(self.character, node)
            .into_iter()
            .map(|line| line.id)
            .collect();

        let Ok(choice) = input.trim().parse::<usize>() else {
            return DialogueTurn::awaiting(format!("{NOT_A_NUMBER}\n{CHOICE_PROMPT}"));
        };
        let Some(&line) = choice.checked_sub(1).and_then(|index| open.get(index)) else {
            return DialogueTurn::awaiting(format!(
                "Scelta non valida (scegli tra 1 e {}).\n{CHOICE_PROMPT}",
                open.len()
            ));
        };

        let reply = world.use_line(line).and_then(|id| world.reply(id)).cloned();
        let name = world
            .character(self.character)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let mut text = match &reply {
            Some(reply) => format!("{name}:\n{}", reply.text),
            None => String::new(),
        };

        world.current_room_mut().activate_event_update();
        let scenario = world.scenario();
        if world.current_room_id() == scenario.corridor
            && world.flags.stranger_confronted
            && !world.flags.stranger_persuaded
        {
            info!("survivor talked down");
            world.flags.stranger_persuaded = true;
        }

        match reply.and_then(|r| r.next_node) {
            Some(next) if !world.open_lines(self.character, next).is_empty() => {
                debug!(character = %self.character, node = next, "dialogue advanced");
                self.state = DialogueState::AwaitingChoice(next);
                text.push_str("\n\n");
                text.push_str(&options(world, self.character, next));
                DialogueTurn::awaiting(text)
            }
            _ => self.finish(world, text),
        }
    }

    /// Parks the session or reports its end, returning the step's narration.
    pub fn settle(self, turn: DialogueTurn, effects: &mut TurnEffects) -> String {
        match turn.outcome {
            None => {
                effects.suspend(Pending::Dialogue(self));
                effects.emit(TurnEvent::AwaitingDialogueChoice);
            }
            Some(outcome) => {
                if outcome == DialogueOutcome::TerminateAndTrigger(Trigger::Climax) {
                    effects.emit(TurnEvent::ClimaxReached);
                }
                effects.emit(TurnEvent::DialogueEnded(outcome));
            }
        }
        turn.text
    }

    fn finish(&mut self, world: &mut WorldState, mut text: String) -> DialogueTurn {
        self.state = DialogueState::Terminated;
        if let Some(character) = world.character_mut(self.character) {
            character.interacted = true;
        }
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(DIALOGUE_OVER);

        let scenario = world.scenario();
        let outcome = if self.character == scenario.climax_character
            && world.current_room_id() == scenario.comms_room
        {
            DialogueOutcome::TerminateAndTrigger(Trigger::Climax)
        } else if let Some(tag) = self.continuation.take() {
            DialogueOutcome::TerminateAndTrigger(Trigger::Continuation(tag))
        } else {
            DialogueOutcome::Terminate
        };
        info!(character = %self.character, ?outcome, "dialogue ended");
        DialogueTurn {
            text,
            outcome: Some(outcome),
        }
    }
}

fn options(world: &WorldState, character: CharacterId, node: u32) -> String {
    let mut text = format!("{OPTIONS_HEADING}\n{SEPARATOR}\n");
    for (number, line) in world.open_lines(character, node).iter().enumerate() {
        let _ = writeln!(text, "{}. {}", number + 1, line.text);
    }
    text.push('\n');
    text.push_str(CHOICE_PROMPT);
    text
}
