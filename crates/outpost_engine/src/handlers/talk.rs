use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::dialogue::DialogueSession;
use crate::effects::TurnEffects;
use crate::handler::Handler;

const NO_TARGET: &str = "Specificare con chi vuoi parlare";
const UNKNOWN_TARGET: &str = "Interlocutore inserito non trovato";
const NOT_HERE: &str = "Personaggio inserito non trovato";
const NOTHING_LEFT: &str = "Questo personaggio non ha più nulla da dirti.";

/// Opens a conversation with a character in the room.
///
/// The survivor stays hidden until the first confrontation, and the
/// antagonist only answers while the encounter is running.
#[derive(Clone, Copy, Debug, Default)]
pub struct TalkHandler;

impl Handler for TalkHandler {
    fn name(&self) -> &'static str {
        "talk"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Talk) {
            return String::new();
        }
        let Some(target) = intent.character else {
            let text = if intent.is_malformed() {
                NO_TARGET
            } else {
                UNKNOWN_TARGET
            };
            return text.into();
        };

        let scenario = world.scenario();
        let room = world.current_room_id();
        if target == scenario.stranger
            && room == scenario.corridor
            && !world.flags.stranger_confronted
        {
            return NOT_HERE.into();
        }
        let Some(character) = world.character(target) else {
            return UNKNOWN_TARGET.into();
        };
        if character.interacted {
            return NOTHING_LEFT.into();
        }
        if target == scenario.boss && room == scenario.boss_room && !world.flags.encounter_active()
        {
            return NOT_HERE.into();
        }

        let mut session = DialogueSession::new(target);
        let turn = session.start(world);
        session.settle(turn, effects)
    }
}
