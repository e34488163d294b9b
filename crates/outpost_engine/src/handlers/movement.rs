use outpost_foundation::{Direction, Exit, Room, RoomId, WorldState};
use outpost_parser::{CommandKind, Intent};
use tracing::{debug, info, warn};

use crate::effects::{Pending, TurnEffects, TurnEvent};
use crate::handler::Handler;

const NO_DIRECTION: &str = "Devi specificare una direzione. Esempio: vai nord, vai sud, ecc.";
const BAD_DIRECTION: &str = "Direzione non valida. Usa: nord, sud, est o ovest";
const NO_EXIT: &str = "Non c'è nulla in quella direzione.";
const CANNOT_LEAVE: &str =
    "Non puoi andartene via. Il dottor Gasly e chiunque sia ancora vivo hanno bisogno di te...";
const BLOCKED: &str = "LA COSA blocca la porta. Non puoi uscire finché la creatura è ancora viva!";
const TORCH_OFF: &str = "(La torcia è stata disattivata)";
const DOOR_LOCKED: &str = "La porta è bloccata. Inserisci il codice di apertura:";

const GUNSHOT: &str = "Mentre giri la maniglia, senti un forte fragore dall'interno:\n\
     BAMM!!!.\n\
     Le tue orecchie iniziano a fischiare quando ti accorgi di un foro nella porta.\n\
     Ti stanno sparando contro!!\n\
     Indietreggi rapidamente, illeso, mentre un altro proiettile colpisce il muro.\n\
     Dalla stanza proviene una voce maschile che grida: \"STAI INDIETRO ...!!!\"\n\
     {Un superstite! Quest'UOMO è armato e terrorizzato. Devo farlo ragionare prima di entrare, devo PARLARGLI.}";
const TALK_FIRST: &str = "{L'UOMO è armato, non posso rischiare di farmi uccidere. Devo PARLARGLI prima di entrare.}";
const BRING_SUPPLIES: &str = "{Entrerò quando avrò trovato sia il lanciafiamme che le medicine. Meglio cercare un'Armeria e l'Infermeria}";

/// Walks through an exit of the current room.
///
/// A committed move attempt always switches the torch off. Locked doors
/// suspend the turn until the code is typed; the communications room is
/// guarded until the player carries the required supplies.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveHandler;

impl Handler for MoveHandler {
    fn name(&self) -> &'static str {
        "move"
    }

    fn handle(&self, world: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Move) {
            return String::new();
        }
        let target = match intent.direction {
            None => return NO_DIRECTION.into(),
            Some(Direction::Invalid) => return BAD_DIRECTION.into(),
            Some(direction) => match world.current_room().exits.toward(direction) {
                Exit::None => return NO_EXIT.into(),
                Exit::Leave => return CANNOT_LEAVE.into(),
                Exit::To(room) => room,
            },
        };
        if world.current_room_id() == world.scenario().boss_room && world.flags.encounter_active()
        {
            return BLOCKED.into();
        }

        let mut lines = Vec::new();
        if world.flags.torch_lit {
            world.set_torch(false);
            lines.push(TORCH_OFF);
        }

        if let Some(refusal) = comms_gate(world, target) {
            lines.push(refusal);
        } else if world.room(target).is_some_and(Room::is_locked) {
            debug!(room = %target, "door code requested");
            effects.suspend(Pending::DoorCode { room: target });
            effects.emit(TurnEvent::AwaitingDoorCode(target));
            lines.push(DOOR_LOCKED);
        } else if world.enter(target) {
            info!(room = %target, "player moved");
        } else {
            warn!(room = %target, "exit leads to an unknown room");
            lines.push(NO_EXIT);
        }
        lines.join("\n")
    }
}

/// Refuses the communications room until the player carries every required
/// item. The first refusal is the survivor's warning shot.
fn comms_gate(world: &mut WorldState, target: RoomId) -> Option<&'static str> {
    let scenario = world.scenario();
    if target != scenario.comms_room
        || scenario.comms_requirements.iter().all(|id| world.carries(*id))
    {
        return None;
    }
    let flags = &mut world.flags;
    if flags.stranger_persuaded {
        Some(BRING_SUPPLIES)
    } else if !flags.stranger_confronted {
        info!("survivor fired a warning shot");
        flags.stranger_confronted = true;
        Some(GUNSHOT)
    } else {
        Some(TALK_FIRST)
    }
}
