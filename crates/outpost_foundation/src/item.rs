//! Items and their composed capabilities.
//!
//! An item is one flat record. What the player can do with it is decided by
//! which optional capability payloads are present, not by a type hierarchy.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::ids::{ItemId, RoomId};

/// Where an item currently is. Exactly one place at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player.
    Inventory,
}

/// Switchable state of an activatable item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Activation {
    /// Whether the item is switched on.
    pub on: bool,
}

/// Weapon payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weapon {
    /// Rounds left.
    pub ammo: u32,
}

/// An object in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Identity.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Text shown when examined.
    pub description: String,
    /// Words that refer to this item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
    /// Current location.
    pub location: Location,
    /// Whether the player may pick it up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collectible: bool,
    /// Present when the item can be switched on and off.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activation: Option<Activation>,
    /// Present when the item can be read.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Present when the item is a weapon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<Weapon>,
}

impl Item {
    /// Creates a plain item with no capabilities.
    #[must_use]
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            location,
            collectible: false,
            activation: None,
            text: None,
            weapon: None,
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

    /// Marks the item as collectible.
    #[must_use]
    pub const fn collectible(mut self) -> Self {
        self.collectible = true;
        self
    }

    /// Makes the item switchable (off by default).
    #[must_use]
    pub const fn activatable(mut self) -> Self {
        self.activation = Some(Activation { on: false });
        self
    }

    /// Makes the item readable.
    #[must_use]
    pub fn readable(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Makes the item a weapon.
    #[must_use]
    pub const fn weapon(mut self, ammo: u32) -> Self {
        self.weapon = Some(Weapon { ammo });
        self
    }

    /// Whether `word` is this item's name or one of its aliases.
    ///
    /// Comparison is exact: the tokenizer has already lowercased the input.
    #[must_use]
    pub fn is_called(&self, word: &str) -> bool {
        self.name == word || self.aliases.iter().any(|alias| alias == word)
    }

    /// Whether the item is switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.activation.is_some_and(|a| a.on)
    }

    /// Whether the item is in the given room.
    #[must_use]
    pub fn is_in(&self, room: RoomId) -> bool {
        self.location == Location::Room(room)
    }

    /// Whether the player carries the item.
    #[must_use]
    pub fn is_carried(&self) -> bool {
        self.location == Location::Inventory
    }
}

/// Legacy classification tags used by tabular content sources.
///
/// Tabular sources store one tag per row instead of capability columns.
/// [`ItemKind::apply`] expands a tag into capability payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Scenery; cannot be picked up.
    Fixed,
    /// Can be picked up.
    Collectible,
    /// Can be picked up and switched on and off.
    Activatable,
    /// Can be picked up and read.
    Readable,
    /// Can be picked up and fired.
    Weapon,
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Oggetto" => Ok(Self::Fixed),
            "OggettoCollezionabile" => Ok(Self::Collectible),
            // Tabular loaders once let this tag fall through into the readable
            // constructor; it maps to its own kind here.
            "OggettoAttivabile" => Ok(Self::Activatable),
            "OggettoLeggibile" => Ok(Self::Readable),
            "Arma" => Ok(Self::Weapon),
            other => Err(Error::new(ErrorKind::UnknownItemKind(other.to_string()))),
        }
    }
}

impl ItemKind {
    /// Expands the tag into capability payloads on `item`.
    ///
    /// `text` is the body of readable items and `ammo` the rounds of weapons.
    #[must_use]
    pub fn apply(self, item: Item, text: Option<String>, ammo: u32) -> Item {
        match self {
            Self::Fixed => item,
            Self::Collectible => item.collectible(),
            Self::Activatable => item.collectible().activatable(),
            Self::Readable => item.collectible().readable(text.unwrap_or_default()),
            Self::Weapon => item.collectible().weapon(ammo),
        }
    }
}
