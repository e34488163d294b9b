//! Bindings from story beats to content records.
//!
//! Handlers never compare display names. The scripted encounter, the locked
//! communications room, and the other story beats are keyed by the ids below,
//! so content can rename anything without breaking rules. An id that names
//! no record leaves its beat inert.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ItemId, RoomId};

/// Ids of the story-critical records in a content snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// Room where the player starts.
    pub start_room: RoomId,
    /// The antagonist of the scripted encounter.
    pub boss: CharacterId,
    /// Room the encounter happens in.
    pub boss_room: RoomId,
    /// Item whose first examination wakes the antagonist.
    pub trigger_item: ItemId,
    /// Light source.
    pub torch: ItemId,
    /// Item used to dig.
    pub shovel: ItemId,
    /// Room with diggable ground.
    pub greenhouse: RoomId,
    /// Item buried in the greenhouse.
    pub flamethrower: ItemId,
    /// Transmitter that can be used but never answers.
    pub radio: ItemId,
    /// Room guarded by the armed survivor.
    pub comms_room: RoomId,
    /// Items the player must carry to enter the communications room.
    pub comms_requirements: Vec<ItemId>,
    /// Character whose conversation in the communications room is the climax.
    pub climax_character: CharacterId,
    /// Survivor hiding in the corridor until the first confrontation.
    pub stranger: CharacterId,
    /// Corridor where the survivor hides.
    pub corridor: RoomId,
    /// Pick-ups that reveal a room's event observation, as `(item, room)`.
    pub revealing_pickups: Vec<(ItemId, RoomId)>,
}

impl Scenario {
    /// A scenario with only a start room; every other beat is unbound.
    #[must_use]
    pub fn minimal(start_room: RoomId) -> Self {
        let unbound_room = RoomId::new(0);
        let unbound_item = ItemId::new(0);
        let unbound_character = CharacterId::new(0);
        Self {
            start_room,
            boss: unbound_character,
            boss_room: unbound_room,
            trigger_item: unbound_item,
            torch: unbound_item,
            shovel: unbound_item,
            greenhouse: unbound_room,
            flamethrower: unbound_item,
            radio: unbound_item,
            comms_room: unbound_room,
            comms_requirements: Vec::new(),
            climax_character: unbound_character,
            stranger: unbound_character,
            corridor: unbound_room,
            revealing_pickups: Vec::new(),
        }
    }
}
