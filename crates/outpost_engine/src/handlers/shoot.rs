use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};
use tracing::info;

use crate::effects::TurnEffects;
use crate::handler::Handler;

const NO_TARGET: &str = "Bersaglio non identificato.";
const HIDDEN_TARGET: &str = "Bersaglio non identificato";
const MISSING_TARGET: &str = "Bersaglio non trovato";
const ALREADY_DEAD: &str = "La creatura è già morta.";
const AFTERMATH: &str = "La creatura giace a terra, il pericolo è passato.";

/// Fires at the antagonist during the encounter.
///
/// Each shot removes one point of health. The last one kills it, stops the
/// ticker, and switches its room to the updated observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShootHandler;

impl Handler for ShootHandler {
    fn name(&self) -> &'static str {
        "shoot"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Shoot) {
            return String::new();
        }
        let Some(target) = intent.character else {
            return NO_TARGET.into();
        };

        let scenario = world.scenario();
        let room = world.current_room_id();
        if target != scenario.boss {
            return match world.character(target) {
                Some(character) if character.is_in(room) => {
                    format!("Non puoi sparare a {}!", character.name)
                }
                _ => MISSING_TARGET.into(),
            };
        }
        let boss_room = scenario.boss_room;
        if room != boss_room || !world.flags.boss_activated {
            return HIDDEN_TARGET.into();
        }

        let Some(boss) = world.character_mut(target) else {
            return MISSING_TARGET.into();
        };
        if boss.health == 0 {
            return ALREADY_DEAD.into();
        }
        let remaining = boss.wound();
        info!(remaining, "antagonist hit");
        match remaining {
            0 => {
                world.flags.boss_defeated = true;
                effects.defeat_ticker();
                if let Some(room) = world.room_mut(boss_room) {
                    room.activate_update();
                }
                format!("Colpo finale! La creatura crolla al suolo, morta.\n{AFTERMATH}")
            }
            1 => "Terzo colpo! La COSA sanguina ma non si arrende.".into(),
            2 => "Secondo colpo! La creatura zoppica ma resiste.".into(),
            _ => "Spari! La COSA barcolla ma avanza furiosa.".into(),
        }
    }
}
