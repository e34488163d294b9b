//! The handler seam.

use outpost_foundation::WorldState;
use outpost_parser::Intent;

use crate::effects::TurnEffects;

/// One verb's reaction to a turn.
///
/// Every registered handler sees every understood intent. A handler that
/// does not care about the intent returns an empty string and leaves the
/// world untouched.
pub trait Handler: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reacts to the intent, returning narration (possibly empty).
    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String;
}
