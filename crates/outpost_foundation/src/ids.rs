//! Typed identifiers for content records.
//!
//! Every table in a content snapshot is keyed by a plain `u32`. The newtypes
//! keep a room id from being passed where an item id is expected.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifies a room.
    RoomId,
    "room"
);
define_id!(
    /// Identifies an item.
    ItemId,
    "item"
);
define_id!(
    /// Identifies a non-player character.
    CharacterId,
    "character"
);
define_id!(
    /// Identifies a selectable player line in a dialogue graph.
    LineId,
    "line"
);
define_id!(
    /// Identifies a character reply in a dialogue graph.
    ReplyId,
    "reply"
);
