//! Rooms, exits, and observation state.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::RoomId;

/// A movement direction carried by an intent.
///
/// `Invalid` is the sentinel for "a direction word was given but it is not
/// one of the four". It is never the same as "no direction given", which
/// intents express as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Unrecognized direction or malformed usage.
    Invalid,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Where an exit leads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exit {
    /// No passage in this direction.
    #[default]
    None,
    /// Leaving the outpost entirely (the "exit game" sentinel).
    Leave,
    /// A passage to another room.
    To(RoomId),
}

/// The four neighbors of a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exits {
    /// Northern neighbor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub north: Exit,
    /// Southern neighbor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub south: Exit,
    /// Eastern neighbor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub east: Exit,
    /// Western neighbor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub west: Exit,
}

impl Exits {
    /// Returns the exit in the given direction. `Invalid` has none.
    #[must_use]
    pub const fn toward(&self, direction: Direction) -> Exit {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::Invalid => Exit::None,
        }
    }

    /// Iterates over every passage to another room.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        [self.north, self.south, self.east, self.west]
            .into_iter()
            .filter_map(|exit| match exit {
                Exit::To(id) => Some(id),
                Exit::None | Exit::Leave => None,
            })
    }
}

/// Why a room's updated observation exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UpdateReason {
    /// The room has no alternate observation.
    #[default]
    None,
    /// The alternate text appears once the torch lights the room.
    TorchLit,
    /// The alternate text appears after a scripted event.
    EventModified,
}

/// A locked door guarding entry to a room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoorLock {
    /// Whether the door is still locked.
    pub locked: bool,
    /// The code that opens it.
    pub code: String,
}

/// A location in the outpost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Identity.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Base description shown on entry.
    pub description: String,
    /// Default observation text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub observation: Option<String>,
    /// Alternate observation text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_observation: Option<String>,
    /// What unlocks the alternate observation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub update_reason: UpdateReason,
    /// Whether the alternate observation is currently shown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_active: bool,
    /// Dark rooms are not visible without a lit torch.
    pub visible: bool,
    /// Optional locked door.
    #[cfg_attr(feature = "serde", serde(default))]
    pub door: Option<DoorLock>,
    /// Neighbors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Exits,
}

impl Room {
    /// Creates a visible room with no observation text and no exits.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            observation: None,
            updated_observation: None,
            update_reason: UpdateReason::None,
            updated_active: false,
            visible: true,
            door: None,
            exits: Exits::default(),
        }
    }

    /// Sets the default observation.
    #[must_use]
    pub fn with_observation(mut self, text: impl Into<String>) -> Self {
        self.observation = Some(text.into());
        self
    }

    /// Sets the alternate observation and the reason that unlocks it.
    #[must_use]
    pub fn with_updated_observation(
        mut self,
        reason: UpdateReason,
        text: impl Into<String>,
    ) -> Self {
        self.update_reason = reason;
        self.updated_observation = Some(text.into());
        self
    }

    /// Marks the room as dark.
    #[must_use]
    pub const fn dark(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Guards the room with a locked door.
    #[must_use]
    pub fn with_door(mut self, code: impl Into<String>) -> Self {
        self.door = Some(DoorLock {
            locked: true,
            code: code.into(),
        });
        self
    }

    /// Sets the neighbors.
    #[must_use]
    pub const fn with_exits(mut self, exits: Exits) -> Self {
        self.exits = exits;
        self
    }

    /// Returns the observation that applies right now.
    #[must_use]
    pub fn current_observation(&self) -> Option<&str> {
        if self.updated_active {
            if let Some(text) = &self.updated_observation {
                return Some(text);
            }
        }
        self.observation.as_deref()
    }

    /// Switches to the updated observation, if the room has one.
    pub fn activate_update(&mut self) {
        if self.updated_observation.is_some() {
            self.updated_active = true;
        }
    }

    /// Switches to the updated observation when it is event driven.
    ///
    /// Returns whether anything changed.
    pub fn activate_event_update(&mut self) -> bool {
        if self.update_reason == UpdateReason::EventModified && !self.updated_active {
            self.activate_update();
            return self.updated_active;
        }
        false
    }

    /// Whether entering requires a door code.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.door.as_ref().is_some_and(|door| door.locked)
    }

    /// Tries to unlock the door with a code. Surrounding whitespace is ignored.
    pub fn try_unlock(&mut self, attempt: &str) -> bool {
        match &mut self.door {
            Some(door) if door.code == attempt.trim() => {
                door.locked = false;
                true
            }
            _ => false,
        }
    }
}
