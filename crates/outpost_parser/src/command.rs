//! The structured result of parsing one line.

use outpost_foundation::{CharacterId, Direction, ItemId};

use crate::vocabulary::{Command, CommandKind};

/// What the player asked for.
///
/// `command == None` means the verb was not understood. The three noun
/// slots are filled independently; handlers decide which one they care
/// about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    /// The recognized verb.
    pub command: Option<Command>,
    /// Item resolved among those lying in the room.
    pub room_item: Option<ItemId>,
    /// Item resolved among those carried.
    pub inventory_item: Option<ItemId>,
    /// Direction word, or the `Invalid` malformed-usage signal.
    pub direction: Option<Direction>,
    /// Character resolved among those in the room.
    pub character: Option<CharacterId>,
}

impl Intent {
    /// An intent whose verb was not recognized.
    #[must_use]
    pub fn not_understood() -> Self {
        Self::default()
    }

    /// A bare intent with just a verb.
    #[must_use]
    pub fn bare(command: Command) -> Self {
        Self {
            command: Some(command),
            ..Self::default()
        }
    }

    /// Sets the direction slot.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the room item slot.
    #[must_use]
    pub fn with_room_item(mut self, item: Option<ItemId>) -> Self {
        self.room_item = item;
        self
    }

    /// Sets the inventory item slot.
    #[must_use]
    pub fn with_inventory_item(mut self, item: Option<ItemId>) -> Self {
        self.inventory_item = item;
        self
    }

    /// Sets the character slot.
    #[must_use]
    pub fn with_character(mut self, character: Option<CharacterId>) -> Self {
        self.character = character;
        self
    }

    /// The verb family, if the verb was recognized.
    #[must_use]
    pub fn kind(&self) -> Option<CommandKind> {
        self.command.as_ref().map(|c| c.kind)
    }

    /// Whether the intent belongs to the given verb family.
    #[must_use]
    pub fn is(&self, kind: CommandKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Whether the verb was recognized.
    #[must_use]
    pub fn is_understood(&self) -> bool {
        self.command.is_some()
    }

    /// Whether the parser flagged extra words on a zero-argument command.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.direction == Some(Direction::Invalid)
    }

    /// Whether any noun slot was filled.
    #[must_use]
    pub fn has_nouns(&self) -> bool {
        self.room_item.is_some() || self.inventory_item.is_some() || self.character.is_some()
    }
}
