//! Main parser pipeline.
//!
//! Orchestrates the flow from raw input to [`Intent`], with per-verb special
//! cases for movement, conversation, combat, and observation.

use tracing::debug;

use crate::command::Intent;
use crate::resolver::EntityResolver;
use crate::scope::Scope;
use crate::stdlib;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{CommandCatalog, CommandKind};
use outpost_foundation::Direction;

/// Result of parsing player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Nothing left after tokenization. Not an error; no turn is played.
    Empty,
    /// An intent, possibly with an unrecognized verb.
    Parsed(Intent),
}

impl ParseResult {
    /// Returns the intent, if any.
    #[must_use]
    pub fn into_intent(self) -> Option<Intent> {
        match self {
            Self::Empty => None,
            Self::Parsed(intent) => Some(intent),
        }
    }
}

/// The command parser.
#[derive(Clone, Debug)]
pub struct CommandParser {
    tokenizer: InputTokenizer,
    catalog: CommandCatalog,
    resolver: EntityResolver,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(
            stdlib::tokenizer(),
            stdlib::catalog(),
            EntityResolver::new(stdlib::directions()),
        )
    }
}

impl CommandParser {
    /// Creates a parser from its parts.
    #[must_use]
    pub fn new(tokenizer: InputTokenizer, catalog: CommandCatalog, resolver: EntityResolver) -> Self {
        Self {
            tokenizer,
            catalog,
            resolver,
        }
    }

    /// Replaces the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: InputTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replaces the command catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CommandCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The command catalog.
    #[must_use]
    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// The tokenizer.
    #[must_use]
    pub fn tokenizer(&self) -> &InputTokenizer {
        &self.tokenizer
    }

    /// Parses player input against the given scope.
    #[must_use]
    pub fn parse(&self, input: &str, scope: &Scope<'_>) -> ParseResult {
        let tokens = self.tokenizer.tokenize(input);
        let result = self.parse_tokens(&tokens, scope);
        debug!(?tokens, ?result, "parsed input");
        result
    }

    /// Parses an already tokenized line.
    #[must_use]
    pub fn parse_tokens(&self, tokens: &[String], scope: &Scope<'_>) -> ParseResult {
        let Some((verb, words)) = tokens.split_first() else {
            return ParseResult::Empty;
        };

        let Some(command) = self.catalog.lookup(verb).cloned() else {
            return ParseResult::Parsed(Intent::not_understood());
        };

        let intent = match command.kind {
            CommandKind::Move if words.len() == 1 => {
                let direction = self.resolver.direction(&words[0]);
                Intent::bare(command).with_direction(direction)
            }
            CommandKind::Talk if words.is_empty() => {
                Intent::bare(command).with_direction(Direction::Invalid)
            }
            CommandKind::Talk | CommandKind::Shoot => {
                let character = self.resolver.scan_characters(words, scope);
                Intent::bare(command).with_character(character)
            }
            CommandKind::Observe if !words.is_empty() => {
                Intent::bare(command).with_direction(Direction::Invalid)
            }
            _ if words.is_empty() => Intent::bare(command),
            _ => {
                let found = self.resolver.resolve(words, scope);
                Intent::bare(command)
                    .with_room_item(found.room_item)
                    .with_inventory_item(found.inventory_item)
                    .with_character(found.character)
            }
        };

        ParseResult::Parsed(intent)
    }
}
