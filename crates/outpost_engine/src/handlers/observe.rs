use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::TurnEffects;
use crate::handler::Handler;

const INVALID: &str =
    "Comando non valido. 'Osserva' è un comando semplice e non accetta parametri.";
const DARK: &str = "👁️: Non si vede niente.";
const NOTHING: &str = "👁️: Non c'è niente di interessante qui.";

/// Looks around the current room.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserveHandler;

impl Handler for ObserveHandler {
    fn name(&self) -> &'static str {
        "observe"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Observe) {
            return String::new();
        }
        if intent.is_malformed() {
            return INVALID.into();
        }
        if !world.can_see() {
            return DARK.into();
        }
        match world.current_room().current_observation() {
            Some(text) => format!("👁️: {text}"),
            None => NOTHING.into(),
        }
    }
}
