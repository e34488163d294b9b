use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::{TurnEffects, TurnEvent};
use crate::handler::Handler;

const NOT_NOW: &str = "Non puoi uscire in questo momento!";

/// Leaves the game, unless the antagonist is on the player's heels.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuitHandler;

impl Handler for QuitHandler {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Quit) {
            return String::new();
        }
        if world.flags.encounter_active() {
            return NOT_NOW.into();
        }
        effects.stop_ticker();
        effects.emit(TurnEvent::QuitRequested);
        String::new()
    }
}
