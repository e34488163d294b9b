//! Dialogue graph records.
//!
//! A character's conversation is a set of numbered nodes. Each node offers
//! the player some [`PlayerLine`]s; each line links to the
//! [`CharacterReply`] it provokes, and the reply names the next node.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, LineId, ReplyId};

/// Node every conversation starts at.
pub const FIRST_NODE: u32 = 1;

/// One selectable player utterance at a node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerLine {
    /// Identity.
    pub id: LineId,
    /// Character the line is addressed to.
    pub character: CharacterId,
    /// Node the line belongs to.
    pub node: u32,
    /// Text shown as an option.
    pub text: String,
    /// Set once chosen; never reset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub used: bool,
    /// The reply this line provokes.
    pub reply: ReplyId,
}

impl PlayerLine {
    /// Creates an unused line.
    #[must_use]
    pub fn new(
        id: LineId,
        character: CharacterId,
        node: u32,
        text: impl Into<String>,
        reply: ReplyId,
    ) -> Self {
        Self {
            id,
            character,
            node,
            text: text.into(),
            used: false,
            reply,
        }
    }
}

/// A character's answer to a player line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharacterReply {
    /// Identity.
    pub id: ReplyId,
    /// Character speaking.
    pub character: CharacterId,
    /// Spoken text.
    pub text: String,
    /// Node to continue at; `None` ends the conversation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_node: Option<u32>,
}

impl CharacterReply {
    /// Creates a reply.
    #[must_use]
    pub fn new(
        id: ReplyId,
        character: CharacterId,
        text: impl Into<String>,
        next_node: Option<u32>,
    ) -> Self {
        Self {
            id,
            character,
            text: text.into(),
            next_node,
        }
    }
}
