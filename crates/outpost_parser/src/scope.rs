//! Candidate pools for entity resolution.
//!
//! Determines which items and characters a command may refer to, based on
//! the player's location.

use outpost_foundation::{Character, Item, WorldState};

/// The three pools a command's nouns are resolved against.
#[derive(Clone, Debug, Default)]
pub struct Scope<'w> {
    /// Items lying in the current room.
    pub room_items: Vec<&'w Item>,
    /// Items the player carries.
    pub inventory: Vec<&'w Item>,
    /// Characters standing in the current room.
    pub characters: Vec<&'w Character>,
}

impl<'w> Scope<'w> {
    /// Collects the pools for the player's current room, in id order.
    #[must_use]
    pub fn of(world: &'w WorldState) -> Self {
        let room = world.current_room_id();
        Self {
            room_items: world.items_in(room).collect(),
            inventory: world.inventory().collect(),
            characters: world.characters_in(room).collect(),
        }
    }
}
