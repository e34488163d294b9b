//! Session, REPL, and CLI for Outpost.
//!
//! This crate provides:
//! - [`Session`] - One game: world, parser, dispatcher, and suspended turns
//! - [`Repl`] - Interactive loop over a [`LineEditor`]
//! - [`GameContent`] - JSON content files
//! - [`demo`] - A small playable outpost
//! - [`logging`] - Diagnostic output on stderr

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod content;
pub mod demo;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::SessionConfig;
pub use content::GameContent;
pub use editor::{
    LineEditor, NarrationPrinter, ReadResult, RustylineEditor, ScriptEditor, StdoutPrinter,
};
pub use logging::init_logging;
pub use repl::Repl;
pub use session::Session;
