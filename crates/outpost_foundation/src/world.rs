//! The mutable aggregate every turn reads and writes.
//!
//! [`WorldState`] is owned by the session. Handlers and the dialogue engine
//! borrow it mutably for the length of one turn; nothing else keeps a copy.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::dialogue::{CharacterReply, PlayerLine};
use crate::ids::{CharacterId, ItemId, LineId, ReplyId, RoomId};
use crate::item::{Item, Location};
use crate::room::Room;
use crate::scenario::Scenario;

/// Story flags that outlive a single turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrativeFlags {
    /// The torch is switched on.
    pub torch_lit: bool,
    /// The antagonist has been woken.
    pub boss_activated: bool,
    /// The antagonist is dead.
    pub boss_defeated: bool,
    /// The armed survivor has fired a warning shot at the player.
    pub stranger_confronted: bool,
    /// The survivor has been talked down after the warning shot.
    pub stranger_persuaded: bool,
    /// The greenhouse ground has been dug up.
    pub ground_dug: bool,
}

impl NarrativeFlags {
    /// Whether the scripted encounter is under way.
    #[must_use]
    pub const fn encounter_active(&self) -> bool {
        self.boss_activated && !self.boss_defeated
    }
}

/// Rooms, items, characters, dialogue graph, and flags of one session.
#[derive(Clone, Debug)]
pub struct WorldState {
    pub(crate) rooms: BTreeMap<RoomId, Room>,
    pub(crate) items: BTreeMap<ItemId, Item>,
    pub(crate) characters: BTreeMap<CharacterId, Character>,
    pub(crate) lines: Vec<PlayerLine>,
    pub(crate) replies: BTreeMap<ReplyId, CharacterReply>,
    pub(crate) current_room: RoomId,
    pub(crate) scenario: Scenario,
    /// Story flags.
    pub flags: NarrativeFlags,
}

impl WorldState {
    /// The scenario bindings.
    #[must_use]
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Id of the room the player is in.
    #[must_use]
    pub const fn current_room_id(&self) -> RoomId {
        self.current_room
    }

    /// The room the player is in.
    ///
    /// The current room always exists: it is validated when the world is
    /// built and only ever replaced by [`WorldState::enter`].
    #[must_use]
    pub fn current_room(&self) -> &Room {
        &self.rooms[&self.current_room]
    }

    /// Mutable access to the room the player is in.
    pub fn current_room_mut(&mut self) -> &mut Room {
        let id = self.current_room;
        self.rooms
            .get_mut(&id)
            .unwrap_or_else(|| unreachable!("current room {id} is always present"))
    }

    /// Moves the player. Returns `false` and stays put if the room is unknown.
    pub fn enter(&mut self, room: RoomId) -> bool {
        if self.rooms.contains_key(&room) {
            self.current_room = room;
            true
        } else {
            false
        }
    }

    /// Looks up a room.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Looks up a room mutably.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Looks up an item mutably.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    /// Items lying in a room, in id order.
    pub fn items_in(&self, room: RoomId) -> impl Iterator<Item = &Item> {
        self.items.values().filter(move |item| item.is_in(room))
    }

    /// Items the player carries, in id order.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> {
        self.items.values().filter(|item| item.is_carried())
    }

    /// Whether the player carries the item.
    #[must_use]
    pub fn carries(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(Item::is_carried)
    }

    /// Moves an item to a new location. Returns `false` if the item is unknown.
    pub fn relocate(&mut self, id: ItemId, location: Location) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.location = location;
                true
            }
            None => false,
        }
    }

    /// Looks up a character.
    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    /// Looks up a character mutably.
    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    /// Characters standing in a room, in id order.
    pub fn characters_in(&self, room: RoomId) -> impl Iterator<Item = &Character> {
        self.characters.values().filter(move |c| c.is_in(room))
    }

    /// Switches the torch and mirrors the state onto the torch item.
    pub fn set_torch(&mut self, on: bool) {
        self.flags.torch_lit = on;
        let torch = self.scenario.torch;
        if let Some(activation) = self.items.get_mut(&torch).and_then(|i| i.activation.as_mut()) {
            activation.on = on;
        }
    }

    /// Whether the current room can be seen.
    #[must_use]
    pub fn can_see(&self) -> bool {
        self.current_room().visible || self.flags.torch_lit
    }

    /// Player lines addressed to a character, in content order.
    pub fn lines_for(&self, character: CharacterId) -> impl Iterator<Item = &PlayerLine> {
        self.lines.iter().filter(move |l| l.character == character)
    }

    /// Unused lines of a character at a node, in content order.
    #[must_use]
    pub fn open_lines(&self, character: CharacterId, node: u32) -> Vec<&PlayerLine> {
        self.lines_for(character)
            .filter(|l| l.node == node && !l.used)
            .collect()
    }

    /// Marks a line used. Returns the reply it links to.
    pub fn use_line(&mut self, id: LineId) -> Option<ReplyId> {
        let line = self.lines.iter_mut().find(|l| l.id == id)?;
        line.used = true;
        Some(line.reply)
    }

    /// Looks up a reply.
    #[must_use]
    pub fn reply(&self, id: ReplyId) -> Option<&CharacterReply> {
        self.replies.get(&id)
    }
}
