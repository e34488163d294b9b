//! Switching the torch on and off.
//!
//! The torch is the only item that can be activated. Lighting it in a dark
//! room reveals the room's torch-lit observation; switching it off during
//! the encounter is refused.

use outpost_foundation::{ItemId, UpdateReason, WorldState};
use outpost_parser::{CommandKind, Intent};
use tracing::debug;

use crate::effects::TurnEffects;
use crate::handler::Handler;

/// Switches the carried torch on.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivateHandler;

/// Switches the carried torch off.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeactivateHandler;

impl Handler for ActivateHandler {
    fn name(&self) -> &'static str {
        "activate"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Activate) {
            return String::new();
        }
        let Some(target) = switch_target(intent) else {
            return "Oggetto da attivare non identificato.".into();
        };
        if !is_carried_torch(world, target) {
            return "Oggetto non 'attivabile'".into();
        }
        if world.flags.torch_lit {
            return "La torcia è già accesa".into();
        }

        world.set_torch(true);
        debug!("torch on");
        let room = world.current_room_mut();
        if room.visible {
            return "Accendi la TORCIA ma tutto è lo stesso. {Accendere la torcia non cambia \
                    nulla qui, la stanza è già abbastanza illuminata}"
                .into();
        }
        if room.update_reason == UpdateReason::TorchLit {
            room.activate_update();
        }
        "Hai attivato la TORCIA. Adesso puoi osservare chiaramente cosa c'è nella stanza.".into()
    }
}

impl Handler for DeactivateHandler {
    fn name(&self) -> &'static str {
        "deactivate"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Deactivate) {
            return String::new();
        }
        let Some(target) = switch_target(intent) else {
            return "Oggetto da disattivare non identificato.".into();
        };
        if !is_carried_torch(world, target) {
            return "Oggetto non disattivabile".into();
        }
        if !world.flags.torch_lit {
            return "La torcia non è accesa.".into();
        }

        let dark = !world.current_room().visible;
        if dark && world.flags.encounter_active() {
            return "{Non posso spegere la torcia adesso! Questa creatura vuole uccidermi!!!}"
                .into();
        }
        world.set_torch(false);
        debug!("torch off");
        if dark {
            "Torcia disattivata. {Adesso non vedo più un accidenti}.".into()
        } else {
            "Torcia disattivata.".into()
        }
    }
}

fn switch_target(intent: &Intent) -> Option<ItemId> {
    if intent.character.is_some() || intent.direction.is_some() {
        return None;
    }
    intent.inventory_item.or(intent.room_item)
}

fn is_carried_torch(world: &WorldState, id: ItemId) -> bool {
    id == world.scenario().torch
        && world.carries(id)
        && world.item(id).is_some_and(|item| item.activation.is_some())
}
