//! Non-player characters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, RoomId};

/// Health every character starts with.
pub const STARTING_HEALTH: u32 = 4;

/// A non-player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Character {
    /// Identity.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Words that refer to this character.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
    /// Current room; `None` for characters that only appear in scripted scenes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub room: Option<RoomId>,
    /// Set once a dialogue with this character has ended.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interacted: bool,
    /// Remaining health.
    #[cfg_attr(feature = "serde", serde(default = "starting_health"))]
    pub health: u32,
}

#[cfg(feature = "serde")]
const fn starting_health() -> u32 {
    STARTING_HEALTH
}

impl Character {
    /// Creates a character with starting health.
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>, room: Option<RoomId>) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            room,
            interacted: false,
            health: STARTING_HEALTH,
        }
    }

    /// Adds referring words.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Whether `word` is this character's name or one of its aliases.
    #[must_use]
    pub fn is_called(&self, word: &str) -> bool {
        self.name == word || self.aliases.iter().any(|alias| alias == word)
    }

    /// Whether the character stands in the given room.
    #[must_use]
    pub fn is_in(&self, room: RoomId) -> bool {
        self.room == Some(room)
    }

    /// Removes one point of health and returns what remains.
    pub fn wound(&mut self) -> u32 {
        self.health = self.health.saturating_sub(1);
        self.health
    }
}
