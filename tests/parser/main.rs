//! Integration tests for the outpost_parser crate.
//!
//! Tests for the input pipeline:
//! - Tokenization
//! - Command catalog lookup
//! - Entity resolution against the demo outpost
//! - Property tests over arbitrary input

mod parser_tests;
mod properties;
mod resolver_tests;
mod tokenizer_tests;
mod vocabulary_tests;

use outpost_foundation::{RoomId, WorldState};

/// The demo outpost with the player moved to `room`.
pub fn world_in(room: RoomId) -> WorldState {
    let mut world = outpost_runtime::demo::snapshot()
        .into_world()
        .unwrap_or_else(|e| panic!("demo content: {e}"));
    assert!(world.enter(room));
    world
}
