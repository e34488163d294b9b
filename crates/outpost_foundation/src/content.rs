//! Read-only content snapshot and its validation.
//!
//! A content provider (relational store, flat file, or literals in code)
//! hands the session one [`ContentSnapshot`]. [`ContentSnapshot::into_world`]
//! checks every cross reference once, so the turn loop can rely on them.

use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::dialogue::{CharacterReply, PlayerLine};
use crate::error::{Error, ErrorContext, Result};
use crate::item::{Item, Location};
use crate::room::Room;
use crate::scenario::Scenario;
use crate::world::{NarrativeFlags, WorldState};

/// Every table a session starts from.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentSnapshot {
    /// Story bindings.
    pub scenario: Scenario,
    /// Rooms.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rooms: Vec<Room>,
    /// Items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    /// Characters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<Character>,
    /// Player lines of every dialogue graph, in presentation order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lines: Vec<PlayerLine>,
    /// Character replies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub replies: Vec<CharacterReply>,
}

impl ContentSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            rooms: Vec::new(),
            items: Vec::new(),
            characters: Vec::new(),
            lines: Vec::new(),
            replies: Vec::new(),
        }
    }

    /// Adds a room.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a character.
    #[must_use]
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Adds a player line.
    #[must_use]
    pub fn with_line(mut self, line: PlayerLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Adds a character reply.
    #[must_use]
    pub fn with_reply(mut self, reply: CharacterReply) -> Self {
        self.replies.push(reply);
        self
    }

    /// Validates cross references and builds the mutable world.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is duplicated within a table, if the start
    /// room is missing, or if an exit, item location, character room, player
    /// line, or reply points at a record that does not exist.
    pub fn into_world(self) -> Result<WorldState> {
        let rooms = index("rooms", self.rooms, |r| r.id, |id| id.get())?;
        let items = index("items", self.items, |i| i.id, |id| id.get())?;
        let characters = index("characters", self.characters, |c| c.id, |id| id.get())?;
        let replies = index("replies", self.replies, |r| r.id, |id| id.get())?;

        let mut line_ids = HashSet::new();
        for line in &self.lines {
            if !line_ids.insert(line.id) {
                return Err(Error::duplicate_id("lines", line.id.get()));
            }
        }

        if !rooms.contains_key(&self.scenario.start_room) {
            return Err(Error::unknown_room(self.scenario.start_room)
                .with_context(ErrorContext::new().with_record("scenario")));
        }

        for room in rooms.values() {
            for target in room.exits.rooms() {
                if !rooms.contains_key(&target) {
                    return Err(Error::unknown_room(target).with_context(record("rooms", room.id)));
                }
            }
        }

        for item in items.values() {
            if let Location::Room(room) = item.location {
                if !rooms.contains_key(&room) {
                    return Err(Error::unknown_room(room).with_context(record("items", item.id)));
                }
            }
        }

        for character in characters.values() {
            if let Some(room) = character.room {
                if !rooms.contains_key(&room) {
                    return Err(
                        Error::unknown_room(room).with_context(record("characters", character.id))
                    );
                }
            }
        }

        for reply in replies.values() {
            if !characters.contains_key(&reply.character) {
                return Err(Error::unknown_character(reply.character)
                    .with_context(record("replies", reply.id)));
            }
        }

        for line in &self.lines {
            if !characters.contains_key(&line.character) {
                return Err(Error::unknown_character(line.character)
                    .with_context(record("lines", line.id)));
            }
            match replies.get(&line.reply) {
                None => {
                    return Err(Error::unknown_reply(line.reply)
                        .with_context(record("lines", line.id)));
                }
                Some(reply) if reply.character != line.character => {
                    return Err(Error::invalid_content(format!(
                        "{} answers {} but {} is addressed to {}",
                        reply.id, reply.character, line.id, line.character
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(WorldState {
            rooms,
            items,
            characters,
            lines: self.lines,
            replies,
            current_room: self.scenario.start_room,
            scenario: self.scenario,
            flags: NarrativeFlags::default(),
        })
    }
}

fn index<K, T>(
    table: &'static str,
    rows: Vec<T>,
    key: impl Fn(&T) -> K,
    raw: impl Fn(K) -> u32,
) -> Result<BTreeMap<K, T>>
where
    K: Ord + Copy,
{
    let mut map = BTreeMap::new();
    for row in rows {
        let id = key(&row);
        if map.insert(id, row).is_some() {
            return Err(Error::duplicate_id(table, raw(id)));
        }
    }
    Ok(map)
}

fn record(table: &str, id: impl std::fmt::Display) -> ErrorContext {
    ErrorContext::new().with_record(table).with_record(id.to_string())
}
