use std::fmt::Write as _;

use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::TurnEffects;
use crate::handler::Handler;
use crate::narration::SEPARATOR;

const INVALID: &str =
    "Comando non valido. 'Inventario' è un comando semplice e non accetta parametri.";
const EMPTY: &str = "Il tuo inventario è vuoto.";

/// Lists what the player carries.
#[derive(Clone, Copy, Debug, Default)]
pub struct InventoryHandler;

impl Handler for InventoryHandler {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Inventory) {
            return String::new();
        }
        if intent.direction.is_some() || intent.has_nouns() {
            return INVALID.into();
        }

        let mut items = world.inventory().peekable();
        if items.peek().is_none() {
            return EMPTY.into();
        }
        let mut text = String::from("Nel tuo inventario ci sono:\n\n");
        for item in items {
            let _ = writeln!(text, "{}\n{SEPARATOR}", item.name);
        }
        text.truncate(text.trim_end().len());
        text
    }
}
