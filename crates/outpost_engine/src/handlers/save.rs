use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::{TurnEffects, TurnEvent};
use crate::handler::Handler;

const INVALID: &str =
    "Comando non valido. 'salva' è un comando semplice e non accetta parametri aggiuntivi.";
const NOT_NOW: &str = "Salvataggio non consentito in questo momento";

/// Asks the persistence layer to save, outside the encounter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SaveHandler;

impl Handler for SaveHandler {
    fn name(&self) -> &'static str {
        "save"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Save) {
            return String::new();
        }
        if intent.direction.is_some() || intent.has_nouns() {
            return INVALID.into();
        }
        if world.current_room_id() == world.scenario().boss_room && world.flags.encounter_active()
        {
            return NOT_NOW.into();
        }
        effects.emit(TurnEvent::SaveRequested);
        String::new()
    }
}
