use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};
use tracing::info;

use crate::effects::TurnEffects;
use crate::handler::Handler;

const NOT_IDENTIFIED: &str = "Oggetto da esaminare non identificato.";
const TOO_DARK: &str = "Non puoi esaminare oggetti al buio.";
const AWAKENING: &str = "🔎: Ti chini sulla poltiglia di peli e fango. All'improvviso la massa \
     si contrae, si solleva e prende forma davanti ai tuoi occhi.\n\
     Un ringhio gutturale riempie la stanza: QUELLA COSA è viva!!!\n\
     {Devo fare qualcosa, e in fretta!}";
const SHOVEL_FOUND: &str = "🔎: Tra i peli e il fango scorgi ... una PALA!!! {Potrebbe tornarmi utile}";
const ONLY_BONES: &str = "🔎: Non sembra esserci nient'altro di utile, solo delle ossa umane.";

/// Describes an item, carried or lying in the room.
///
/// Examining the trigger item in the antagonist's room wakes it up the first
/// time and starts the ticker.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExamineHandler;

impl Handler for ExamineHandler {
    fn name(&self) -> &'static str {
        "examine"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Examine) {
            return String::new();
        }
        if intent.character.is_some() || intent.direction.is_some() {
            return NOT_IDENTIFIED.into();
        }
        let Some(target) = intent.inventory_item.or(intent.room_item) else {
            return NOT_IDENTIFIED.into();
        };
        if !world.can_see() {
            return TOO_DARK.into();
        }

        let scenario = world.scenario();
        let room = world.current_room_id();
        if intent.room_item == Some(scenario.trigger_item) && room == scenario.boss_room {
            let shovel = scenario.shovel;
            if !world.flags.boss_activated && !world.flags.boss_defeated {
                info!("antagonist awakened");
                world.flags.boss_activated = true;
                effects.start_ticker();
                return AWAKENING.into();
            }
            if world.item(shovel).is_some_and(|item| item.is_in(room)) {
                return SHOVEL_FOUND.into();
            }
            return ONLY_BONES.into();
        }

        match world.item(target) {
            Some(item) => format!("🔎: {}", item.description),
            None => NOT_IDENTIFIED.into(),
        }
    }
}
