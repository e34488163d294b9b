use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::{TurnEffects, TurnEvent};
use crate::handler::Handler;

const NOT_IDENTIFIED: &str = "Oggetto da leggere non identificato.";
const NOTHING_TO_READ: &str = "Non c'è nulla da leggere.";

/// Opens a readable item, lying in the room or carried.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadHandler;

impl Handler for ReadHandler {
    fn name(&self) -> &'static str {
        "read"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Read) {
            return String::new();
        }
        if intent.room_item.is_none() && intent.inventory_item.is_none() {
            return NOT_IDENTIFIED.into();
        }

        let room = world.current_room_id();
        let in_room = intent
            .room_item
            .and_then(|id| world.item(id))
            .filter(|item| item.is_in(room) && item.text.is_some());
        let carried = intent
            .inventory_item
            .and_then(|id| world.item(id))
            .filter(|item| item.is_carried() && item.text.is_some());

        let Some(item) = in_room.or(carried) else {
            return NOTHING_TO_READ.into();
        };
        effects.emit(TurnEvent::Document {
            title: item.name.clone(),
            text: item.text.clone().unwrap_or_default(),
        });
        format!("Lettura di {}...", item.name)
    }
}
