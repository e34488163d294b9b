use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};
use tracing::info;

use super::item_name;
use crate::effects::TurnEffects;
use crate::handler::Handler;

const NOT_IDENTIFIED: &str = "Oggetto da usare non identificato.";
const UNUSABLE: &str = "L'oggetto specificato non può essere \"usato\". Ma forse è possibile \
     interagirci in un altro modo.";
const DIG: &str = "Affondi la PALA nella terra morbida della serra.\n\
     Dopo qualche minuto di fatica la lama urta qualcosa di metallico.\n\
     Scavi con le mani, tiri fuori un involucro di tela cerata e lo apri...\n\
     Hai dissotterrato un LANCIAFIAMME!";

/// Uses a carried item.
///
/// The shovel digs up the greenhouse once; the radio only ever returns
/// static.
#[derive(Clone, Copy, Debug, Default)]
pub struct UseHandler;

impl Handler for UseHandler {
    fn name(&self) -> &'static str {
        "use"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, _: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Use) {
            return String::new();
        }
        let Some(target) = intent.inventory_item else {
            return NOT_IDENTIFIED.into();
        };

        let scenario = world.scenario();
        let (shovel, greenhouse, radio) = (scenario.shovel, scenario.greenhouse, scenario.radio);
        if target == shovel && world.current_room_id() == greenhouse && !world.flags.ground_dug {
            info!("greenhouse dug up");
            world.flags.ground_dug = true;
            world.current_room_mut().activate_update();
            return DIG.into();
        }
        if target == radio {
            let radio = item_name(world, target).to_uppercase();
            return format!(
                "Accendi la {radio} e chiami la base: \"Qui avamposto, mi ricevete? Passo.\"\n\
                 Dall'altoparlante arriva solo un fruscio. Riprovi, ma nessuno risponde.\n\
                 {{Devo trovare un altro modo per chiedere aiuto.}}"
            );
        }
        UNUSABLE.into()
    }
}
