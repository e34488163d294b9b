//! Natural language parser for the outpost adventure.
//!
//! This crate transforms player input like "prendi la pala" or "vai nord"
//! into an [`Intent`] the turn engine can dispatch.
//!
//! # Architecture
//!
//! ```text
//! "Prendi la PALA"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["prendi", "pala"]       (lowercase, stopwords out)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command(PickUp)          (first hit in catalog order)
//! │ CATALOG         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ENTITY          │  → room item #7             (room, then inventory,
//! │ RESOLVER        │                              characters independently)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INTENT          │  → Intent { PickUp, room_item: 7, .. }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to words
//! - [`vocabulary`] - Command kinds and the ordered command catalog
//! - [`scope`] - Candidate pools for the current room
//! - [`resolver`] - Noun and direction resolution
//! - [`command`] - The [`Intent`] produced by parsing
//! - [`parser`] - Main parser pipeline orchestration
//! - [`stdlib`] - Standard Italian vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod resolver;
pub mod scope;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::Intent;
pub use parser::{CommandParser, ParseResult};
pub use resolver::{DirectionWords, EntityResolver, Resolution};
pub use scope::Scope;
pub use tokenizer::InputTokenizer;
pub use vocabulary::{Command, CommandCatalog, CommandKind};
