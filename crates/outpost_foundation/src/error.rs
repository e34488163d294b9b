//! Error types for the Outpost system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Game-logic refusals are never errors: they are narration. These types
//! cover content validation and the I/O of the surrounding runtime.

use std::fmt;

use thiserror::Error;

use crate::ids::{CharacterId, ItemId, ReplyId, RoomId};

/// The main error type for Outpost operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(id: RoomId) -> Self {
        Self::new(ErrorKind::UnknownRoom(id))
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(id: ItemId) -> Self {
        Self::new(ErrorKind::UnknownItem(id))
    }

    /// Creates an unknown character error.
    #[must_use]
    pub fn unknown_character(id: CharacterId) -> Self {
        Self::new(ErrorKind::UnknownCharacter(id))
    }

    /// Creates an unknown reply error.
    #[must_use]
    pub fn unknown_reply(id: ReplyId) -> Self {
        Self::new(ErrorKind::UnknownReply(id))
    }

    /// Creates a duplicate identifier error.
    #[must_use]
    pub fn duplicate_id(table: &'static str, id: u32) -> Self {
        Self::new(ErrorKind::DuplicateId { table, id })
    }

    /// Creates an invalid content error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContent(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an I/O error from a message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room id was referenced but never defined.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// An item id was referenced but never defined.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// A character id was referenced but never defined.
    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    /// A player line links to a reply that does not exist.
    #[error("unknown reply: {0}")]
    UnknownReply(ReplyId),

    /// Two rows of the same table share an identifier.
    #[error("duplicate {table} id: {id}")]
    DuplicateId {
        /// Table the duplicate was found in.
        table: &'static str,
        /// The duplicated identifier.
        id: u32,
    },

    /// A legacy item classification tag was not recognized.
    #[error("unknown item kind: {0}")]
    UnknownItemKind(String),

    /// Content is structurally inconsistent.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Invalid runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure in the surrounding runtime.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Content source (file name or provider label).
    pub source: Option<String>,
    /// Table or record path inside the source.
    pub record: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a record path segment.
    #[must_use]
    pub fn with_record(mut self, record: impl Into<String>) -> Self {
        self.record.push(record.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.record.is_empty() {
            write!(f, " at {}", self.record.join("/"))?;
        }
        Ok(())
    }
}

/// Result type alias using the Outpost error.
pub type Result<T> = std::result::Result<T, Error>;
