//! World model, identifiers, and content validation for Outpost.
//!
//! This crate provides:
//! - Typed identifiers ([`RoomId`], [`ItemId`], [`CharacterId`], ...)
//! - The world records ([`Room`], [`Item`], [`Character`], dialogue graph)
//! - [`WorldState`] - The mutable aggregate a session plays on
//! - [`ContentSnapshot`] - Read-only content validated into a world
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod content;
pub mod dialogue;
pub mod error;
pub mod ids;
pub mod item;
pub mod room;
pub mod scenario;
pub mod world;

pub use character::{Character, STARTING_HEALTH};
pub use content::ContentSnapshot;
pub use dialogue::{CharacterReply, FIRST_NODE, PlayerLine};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{CharacterId, ItemId, LineId, ReplyId, RoomId};
pub use item::{Activation, Item, ItemKind, Location, Weapon};
pub use room::{Direction, DoorLock, Exit, Exits, Room, UpdateReason};
pub use scenario::Scenario;
pub use world::{NarrativeFlags, WorldState};
