//! Entity resolution.
//!
//! Maps the words after the verb to a room item, a carried item, a
//! character, or a direction.
//!
//! Resolution order for the generic path:
//! 1. Room item at word 1; if found and a word 2 exists, word 2 replaces it
//!    (possibly with nothing)
//! 2. Only when no room item survived: carried item at word 1, then word 2
//! 3. Independently: character at word 1, then word 2
//!
//! The re-check of word 2 exists on the room-item path only.

use outpost_foundation::{Character, CharacterId, Direction, Item, ItemId};

use crate::scope::Scope;

/// Items and character found by the generic path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Item lying in the room.
    pub room_item: Option<ItemId>,
    /// Item carried by the player.
    pub inventory_item: Option<ItemId>,
    /// Character in the room.
    pub character: Option<CharacterId>,
}

/// Direction keyword table.
#[derive(Clone, Debug)]
pub struct DirectionWords {
    words: Vec<(String, Direction)>,
}

impl DirectionWords {
    /// Creates a table from `(word, direction)` pairs.
    #[must_use]
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Direction)>,
        S: Into<String>,
    {
        Self {
            words: pairs
                .into_iter()
                .map(|(word, dir)| (word.into().to_lowercase(), dir))
                .collect(),
        }
    }

    /// Maps a word to its direction, ignoring case. Unknown words are `Invalid`.
    #[must_use]
    pub fn direction(&self, word: &str) -> Direction {
        let word = word.to_lowercase();
        self.words
            .iter()
            .find(|(w, _)| *w == word)
            .map_or(Direction::Invalid, |(_, dir)| *dir)
    }
}

/// Resolves nouns against a [`Scope`].
#[derive(Clone, Debug)]
pub struct EntityResolver {
    directions: DirectionWords,
}

impl EntityResolver {
    /// Creates a resolver with the given direction keywords.
    #[must_use]
    pub fn new(directions: DirectionWords) -> Self {
        Self { directions }
    }

    /// Maps a direction word.
    #[must_use]
    pub fn direction(&self, word: &str) -> Direction {
        self.directions.direction(word)
    }

    /// Generic resolution of the words after the verb.
    ///
    /// `words` excludes the verb. Only the first two words take part.
    #[must_use]
    pub fn resolve(&self, words: &[String], scope: &Scope<'_>) -> Resolution {
        let Some(first) = words.first() else {
            return Resolution::default();
        };
        let second = words.get(1);

        let mut room_item = find_item(first, &scope.room_items);
        if room_item.is_some() {
            if let Some(second) = second {
                room_item = find_item(second, &scope.room_items);
            }
        }

        let inventory_item = if room_item.is_none() {
            find_item(first, &scope.inventory)
                .or_else(|| second.and_then(|w| find_item(w, &scope.inventory)))
        } else {
            None
        };

        let character = find_character(first, &scope.characters)
            .or_else(|| second.and_then(|w| find_character(w, &scope.characters)));

        Resolution {
            room_item,
            inventory_item,
            character,
        }
    }

    /// Scans every word against the characters only. First match wins.
    #[must_use]
    pub fn scan_characters(&self, words: &[String], scope: &Scope<'_>) -> Option<CharacterId> {
        words
            .iter()
            .find_map(|w| find_character(w, &scope.characters))
    }
}

fn find_item(word: &str, pool: &[&Item]) -> Option<ItemId> {
    pool.iter().find(|item| item.is_called(word)).map(|item| item.id)
}

fn find_character(word: &str, pool: &[&Character]) -> Option<CharacterId> {
    pool.iter().find(|c| c.is_called(word)).map(|c| c.id)
}
