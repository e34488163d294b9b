use outpost_foundation::{Location, WorldState};
use outpost_parser::{CommandKind, Intent};
use tracing::{debug, info};

use crate::effects::TurnEffects;
use crate::handler::Handler;

const NOT_IDENTIFIED: &str = "Oggetto da raccogliere non identificato.";
const NOT_HERE: &str = "In questa stanza non c'è questo oggetto.";
const NOT_COLLECTIBLE: &str = "Non puoi raccogliere questo oggetto.";
const NOT_NOW: &str = "Al momento non puoi raccogliere questo oggetto";

/// Moves a collectible item from the room into the inventory.
///
/// The shovel stays out of reach until the antagonist is dead, and the
/// flamethrower until the greenhouse has been dug up.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickUpHandler;

impl Handler for PickUpHandler {
    fn name(&self) -> &'static str {
        "pickup"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::PickUp) {
            return String::new();
        }
        let Some(target) = intent.room_item else {
            return if intent.inventory_item.is_some() {
                NOT_HERE
            } else {
                NOT_IDENTIFIED
            }
            .into();
        };

        let room = world.current_room_id();
        let Some(item) = world.item(target).filter(|item| item.is_in(room)) else {
            return NOT_HERE.into();
        };
        if !item.collectible {
            return NOT_COLLECTIBLE.into();
        }
        let name = item.name.clone();

        let scenario = world.scenario();
        let flags = world.flags;
        let shovel_guarded = target == scenario.shovel
            && room == scenario.boss_room
            && !(flags.boss_activated && flags.boss_defeated);
        let buried = target == scenario.flamethrower
            && room == scenario.greenhouse
            && !flags.ground_dug;
        if shovel_guarded || buried {
            return NOT_NOW.into();
        }

        let reveals = scenario
            .revealing_pickups
            .iter()
            .any(|(item, at)| *item == target && *at == room);
        if reveals && world.current_room_mut().activate_event_update() {
            debug!(%room, "pick-up revealed a new observation");
        }

        world.relocate(target, Location::Inventory);
        info!(item = %target, "picked up");
        format!("Hai raccolto: {name}")
    }
}
