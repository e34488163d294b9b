//! Shared narration formatting.

use outpost_foundation::Room;

/// Horizontal rule used under headings.
pub const SEPARATOR: &str = "----------------------------------";

/// Answer to an unrecognized verb.
pub const NOT_UNDERSTOOD: &str =
    "Non ho capito cosa intendi fare. Riprova inserendo un altro comando.";

/// The heading printed when the player enters a room.
#[must_use]
pub fn room_banner(room: &Room) -> String {
    format!("Ti trovi in: {}\n{SEPARATOR}\n{}", room.name, room.description)
}
