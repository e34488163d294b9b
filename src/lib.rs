//! Outpost - command interpreter and turn engine for a text adventure
//!
//! This crate re-exports all layers of the Outpost system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: outpost_runtime    - Session, REPL, CLI, demo content
//! Layer 2: outpost_engine     - Dispatcher, handlers, dialogue, ticker
//! Layer 1: outpost_parser     - Tokenizer, command catalog, entity resolver
//! Layer 0: outpost_foundation - Ids, world model, content validation, errors
//! ```

pub use outpost_engine as engine;
pub use outpost_foundation as foundation;
pub use outpost_parser as parser;
pub use outpost_runtime as runtime;
