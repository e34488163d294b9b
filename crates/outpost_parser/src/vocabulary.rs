//! Command catalog.
//!
//! Stores the recognized verbs with their canonical names and aliases, in
//! registration order. Lookup is first-hit in that order.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of verbs the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandKind {
    /// List carried items.
    Inventory,
    /// Start a conversation.
    Talk,
    /// Pick an item up.
    PickUp,
    /// Walk in a direction.
    Move,
    /// Leave the game.
    Quit,
    /// Look around the current room.
    Observe,
    /// Use a carried item.
    Use,
    /// Switch an item on.
    Activate,
    /// Switch an item off.
    Deactivate,
    /// Show the instructions.
    Help,
    /// Read a document.
    Read,
    /// Look closely at an item.
    Examine,
    /// Fire at a target.
    Shoot,
    /// Ask the persistence layer to save.
    Save,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A recognized verb with its aliases.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// Verb family.
    pub kind: CommandKind,
    /// Canonical name.
    pub name: String,
    /// Alternative words.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl Command {
    /// Creates a command with no aliases.
    #[must_use]
    pub fn new(kind: CommandKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Adds aliases.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Whether `token` is the canonical name or an alias. Case-sensitive.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|alias| alias == token)
    }

    /// Whether this command belongs to the given verb family.
    #[must_use]
    pub fn is(&self, kind: CommandKind) -> bool {
        self.kind == kind
    }
}

/// Ordered catalog of commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommandCatalog {
    commands: Vec<Command>,
}

impl CommandCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command. Earlier registrations win lookups.
    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Builder form of [`CommandCatalog::register`].
    #[must_use]
    pub fn with(mut self, command: Command) -> Self {
        self.register(command);
        self
    }

    /// Returns the index of the first command matching `token`.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.matches(token))
    }

    /// Returns the first command matching `token`.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&Command> {
        self.resolve(token).and_then(|i| self.commands.get(i))
    }

    /// Returns the command at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// Returns the first command of a verb family.
    #[must_use]
    pub fn first_of(&self, kind: CommandKind) -> Option<&Command> {
        self.commands.iter().find(|c| c.is(kind))
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Every word that resolves to some command, for completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.commands
            .iter()
            .flat_map(|c| std::iter::once(&c.name).chain(&c.aliases))
            .cloned()
            .collect()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
