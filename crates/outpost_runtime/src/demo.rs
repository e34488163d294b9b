//! Built-in demo content: a small research outpost in the Antarctic.
//!
//! Fifteen rooms, a dozen items, and five characters, wired to every story
//! beat the engine knows about. Used by the binary when no content file is
//! given, and by the integration tests.

use outpost_foundation::{
    Character, CharacterId, CharacterReply, ContentSnapshot, Exit, Exits, Item, ItemId, LineId,
    Location, PlayerLine, ReplyId, Room, RoomId, Scenario, UpdateReason,
};

use crate::content::GameContent;

/// Shown once before the first room.
pub const INTRO: &str = "\
Avamposto 31, Antartide. Da tre giorni la base non risponde alla radio.\n\
L'elicottero ti lascia davanti all'ingresso e riparte prima che la bufera\n\
chiuda il cielo. Sei solo, e dentro qualcuno potrebbe essere ancora vivo.";

// ===== Rooms =====

/// Where the player starts.
pub const ENTRANCE: RoomId = RoomId::new(1);
/// Common room.
pub const COMMON_ROOM: RoomId = RoomId::new(2);
/// Mess hall, where the guard waits.
pub const MESS: RoomId = RoomId::new(3);
/// Central hub.
pub const HUB: RoomId = RoomId::new(4);
/// Dormitory.
pub const DORMITORY: RoomId = RoomId::new(5);
/// Kennel, where the antagonist hides.
pub const KENNEL: RoomId = RoomId::new(6);
/// Armory.
pub const ARMORY: RoomId = RoomId::new(7);
/// Infirmary, behind a coded door.
pub const INFIRMARY: RoomId = RoomId::new(8);
/// Laboratory.
pub const LAB: RoomId = RoomId::new(9);
/// Greenhouse, behind a coded door.
pub const GREENHOUSE: RoomId = RoomId::new(10);
/// West wing, first stretch.
pub const WING_START: RoomId = RoomId::new(11);
/// West wing, middle stretch.
pub const WING_MIDDLE: RoomId = RoomId::new(12);
/// West wing, far end.
pub const WING_END: RoomId = RoomId::new(13);
/// Corridor in front of the communications room.
pub const CORRIDOR: RoomId = RoomId::new(14);
/// Communications room.
pub const COMMS_ROOM: RoomId = RoomId::new(15);

// ===== Items =====

/// Pistol.
pub const PISTOL: ItemId = ItemId::new(1);
/// The doctor's file.
pub const DOSSIER: ItemId = ItemId::new(2);
/// The botanist's diary.
pub const DIARY: ItemId = ItemId::new(3);
/// Photograph with the greenhouse code on its back.
pub const PHOTO: ItemId = ItemId::new(4);
/// Torch.
pub const TORCH: ItemId = ItemId::new(5);
/// Staff list.
pub const STAFF_LIST: ItemId = ItemId::new(6);
/// Shovel.
pub const SHOVEL: ItemId = ItemId::new(7);
/// Flamethrower.
pub const FLAMETHROWER: ItemId = ItemId::new(8);
/// Painkillers.
pub const PAINKILLERS: ItemId = ItemId::new(9);
/// The slime that wakes the antagonist.
pub const SLIME: ItemId = ItemId::new(10);
/// Terrarium.
pub const TERRARIUM: ItemId = ItemId::new(11);
/// Radio transceiver.
pub const RADIO: ItemId = ItemId::new(12);

// ===== Characters =====

/// Guard in the mess hall.
pub const GUARD: CharacterId = CharacterId::new(1);
/// Survivor barricaded behind the communications room door.
pub const STRANGER: CharacterId = CharacterId::new(2);
/// The antagonist.
pub const CREATURE: CharacterId = CharacterId::new(3);
/// The wounded doctor.
pub const DOCTOR: CharacterId = CharacterId::new(4);
/// Voice on the radio; stands in no room.
pub const OPERATOR: CharacterId = CharacterId::new(5);

/// Code of the infirmary door.
pub const INFIRMARY_CODE: &str = "20051982";
/// Code of the greenhouse door.
pub const GREENHOUSE_CODE: &str = "47187546";

/// The demo content, ready for a session.
#[must_use]
pub fn content() -> GameContent {
    GameContent::from(snapshot())
}

/// The demo world tables.
#[must_use]
pub fn snapshot() -> ContentSnapshot {
    let mut snapshot = ContentSnapshot::new(scenario());
    snapshot.rooms = rooms();
    snapshot.items = items();
    snapshot.characters = characters();
    let (lines, replies) = dialogues();
    snapshot.lines = lines;
    snapshot.replies = replies;
    snapshot
}

fn scenario() -> Scenario {
    Scenario {
        start_room: ENTRANCE,
        boss: CREATURE,
        boss_room: KENNEL,
        trigger_item: SLIME,
        torch: TORCH,
        shovel: SHOVEL,
        greenhouse: GREENHOUSE,
        flamethrower: FLAMETHROWER,
        radio: RADIO,
        comms_room: COMMS_ROOM,
        comms_requirements: vec![FLAMETHROWER, PAINKILLERS],
        climax_character: DOCTOR,
        stranger: STRANGER,
        corridor: CORRIDOR,
        revealing_pickups: vec![(PHOTO, DORMITORY), (PAINKILLERS, INFIRMARY)],
    }
}

fn exits(north: Exit, south: Exit, east: Exit, west: Exit) -> Exits {
    Exits {
        north,
        south,
        east,
        west,
    }
}

#[allow(clippy::too_many_lines)]
fn rooms() -> Vec<Room> {
    use Exit::{Leave, None as Wall, To};

    vec![
        Room::new(
            ENTRANCE,
            "Ingresso",
            "Un vestibolo gelido. La porta esterna sbatte nel vento e la neve entra a mulinelli.",
        )
        .with_observation("Tute termiche appese, stivali in fila. Nessuno le ha indossate da giorni.")
        .with_exits(exits(To(COMMON_ROOM), Leave, Wall, Wall)),
        Room::new(
            COMMON_ROOM,
            "Sala Comune",
            "Divani sfondati, una televisione accesa sul nulla, tazze abbandonate sul tavolo.",
        )
        .with_observation("Alla parete è appesa la LISTA dei dipendenti della base.")
        .with_exits(exits(To(HUB), To(ENTRANCE), To(MESS), Wall)),
        Room::new(
            MESS,
            "Mensa",
            "Tavoli rovesciati e vassoi sparsi. Una GUARDIA siede immobile in fondo alla sala.",
        )
        .with_observation("La guardia stringe un fucile scarico e fissa la porta.")
        .with_exits(exits(Wall, Wall, Wall, To(COMMON_ROOM))),
        Room::new(
            HUB,
            "Sala Centrale",
            "Il cuore della base: quattro porte, un tavolo di comando e un quadro elettrico che ronza.",
        )
        .with_observation("Sul tavolo di comando c'è un RICETRASMETTITORE portatile.")
        .with_exits(exits(To(CORRIDOR), To(COMMON_ROOM), To(DORMITORY), To(WING_START))),
        Room::new(
            DORMITORY,
            "Dormitorio",
            "File di brande disfatte. Qualcuno è scappato di notte, lasciando tutto com'era.",
        )
        .with_observation("Su una branda c'è un DIARIO e, accanto, una FOTOGRAFIA incorniciata.")
        .with_updated_observation(
            UpdateReason::EventModified,
            "La cornice vuota è rimasta sulla branda, accanto al diario.",
        )
        .with_exits(exits(Wall, Wall, Wall, To(HUB))),
        Room::new(
            KENNEL,
            "Canile",
            "Un odore dolciastro di sangue. Le gabbie sono divelte dall'interno.",
        )
        .dark()
        .with_observation(
            "Sul pavimento si allarga una POLTIGLIA rossastra. Qualcosa si muove nell'ombra.",
        )
        .with_updated_observation(
            UpdateReason::None,
            "La carcassa della COSA giace fra le gabbie. Nella poltiglia luccica il manico di una PALA.",
        )
        .with_exits(exits(Wall, Wall, Wall, To(CORRIDOR))),
        Room::new(
            ARMORY,
            "Armeria",
            "Rastrelliere vuote e casse aperte. Qualcuno si è armato in fretta.",
        )
        .with_observation("In una cassa è rimasta una PISTOLA con il caricatore pieno.")
        .with_exits(exits(Wall, Wall, To(CORRIDOR), Wall)),
        Room::new(
            INFIRMARY,
            "Infermeria",
            "Lettini, flebo e armadietti di metallo. Tutto è in ordine, troppo in ordine.",
        )
        .with_observation("In un armadietto socchiuso c'è una scatola di ANALGESICO.")
        .with_updated_observation(
            UpdateReason::EventModified,
            "L'armadietto dei medicinali è vuoto.",
        )
        .with_door(INFIRMARY_CODE)
        .with_exits(exits(Wall, Wall, To(WING_END), Wall)),
        Room::new(
            LAB,
            "Laboratorio",
            "Banconi, microscopi e campioni congelati. La luce è saltata.",
        )
        .dark()
        .with_updated_observation(
            UpdateReason::TorchLit,
            "Alla luce della torcia vedi un DOSSIER aperto sul bancone principale.",
        )
        .with_exits(exits(Wall, Wall, To(WING_START), Wall)),
        Room::new(
            GREENHOUSE,
            "Serra",
            "Aria umida e lampade viola. Le piante crescono in un grande TERRARIO.",
        )
        .with_observation("La terra del terrario in un angolo sembra smossa di recente.")
        .with_updated_observation(
            UpdateReason::EventModified,
            "Una buca profonda si apre nel terrario, dove era sepolto il lanciafiamme.",
        )
        .with_door(GREENHOUSE_CODE)
        .with_exits(exits(Wall, Wall, To(WING_MIDDLE), Wall)),
        Room::new(
            WING_START,
            "Inizio del Corridoio",
            "L'ala ovest comincia qui. Le luci d'emergenza tingono tutto di rosso.",
        )
        .with_exits(exits(To(WING_MIDDLE), Wall, To(HUB), To(LAB))),
        Room::new(
            WING_MIDDLE,
            "Metà del Corridoio",
            "Il corridoio prosegue. Sulla parete ovest, una porta a vetri appannata.",
        )
        .with_exits(exits(To(WING_END), To(WING_START), Wall, To(GREENHOUSE))),
        Room::new(
            WING_END,
            "Fine del Corridoio",
            "Il corridoio finisce contro una porta con il simbolo della croce rossa.",
        )
        .with_exits(exits(Wall, To(WING_MIDDLE), Wall, To(INFIRMARY))),
        Room::new(
            CORRIDOR,
            "Corridoio",
            "Un corridoio stretto. A nord, la porta blindata della sala comunicazioni.",
        )
        .with_observation("Dietro la porta blindata qualcuno respira affannosamente.")
        .with_updated_observation(
            UpdateReason::EventModified,
            "Dalla porta socchiusa l'UOMO ti osserva, il fucile abbassato.",
        )
        .with_exits(exits(To(COMMS_ROOM), To(HUB), To(KENNEL), To(ARMORY))),
        Room::new(
            COMMS_ROOM,
            "Sala Comunicazioni",
            "Monitor spenti e una radio a onde corte. Il dottor GASLY è accasciato contro la parete.",
        )
        .with_observation("Il dottore ha una ferita alla gamba e trema per la febbre.")
        .with_updated_observation(
            UpdateReason::EventModified,
            "Il dottore, medicato, regola le frequenze della radio.",
        )
        .with_exits(exits(Wall, To(CORRIDOR), Wall, Wall)),
    ]
}

fn items() -> Vec<Item> {
    let here = Location::Room;
    vec![
        Item::new(
            PISTOL,
            "Pistola",
            "Una semiautomatica d'ordinanza. Il caricatore è pieno.",
            here(ARMORY),
        )
        .with_aliases(["pistola", "arma"])
        .collectible()
        .weapon(6),
        Item::new(DOSSIER, "Dossier", "Un fascicolo con il timbro del personale.", here(LAB))
            .with_aliases(["dossier", "fascicolo"])
            .collectible()
            .readable(
                "Dott. Gasly, medico di base.\n\
                 Nato a Bergen il 20/05/1982.\n\
                 Nota: usa la sua data di nascita per ogni codice. Da correggere.",
            ),
        Item::new(DIARY, "Diario", "Un diario rilegato in pelle, umido di neve.", here(DORMITORY))
            .with_aliases(["diario"])
            .collectible()
            .readable(
                "Giorno 12: i cani sono inquieti da quando abbiamo portato dentro il campione.\n\
                 Giorno 14: ho nascosto il lanciafiamme nel terrario della serra. \
                 Se serve, basta scavare.\n\
                 Giorno 15: il codice della serra è dietro la foto di mia figlia.",
            ),
        Item::new(
            PHOTO,
            "Fotografia",
            "Una bambina sorride davanti a un fiordo. Sul retro, a penna: 47187546.",
            here(DORMITORY),
        )
        .with_aliases(["fotografia", "foto"])
        .collectible(),
        Item::new(TORCH, "Torcia", "Una torcia elettrica a pile.", here(ENTRANCE))
            .with_aliases(["torcia", "lampada"])
            .collectible()
            .activatable(),
        Item::new(
            STAFF_LIST,
            "Lista Dipendenti",
            "Un foglio plastificato appeso alla parete.",
            here(COMMON_ROOM),
        )
        .with_aliases(["lista", "dipendenti"])
        .readable(
            "Personale dell'avamposto 31:\n\
             Gasly (medico), Sips (botanico), Mugs (radiofonista), tre guardie, quattro cani.",
        ),
        Item::new(SHOVEL, "Pala", "Una pala da neve con il manico rinforzato.", here(KENNEL))
            .with_aliases(["pala", "badile"])
            .collectible(),
        Item::new(
            FLAMETHROWER,
            "Lanciafiamme",
            "Un lanciafiamme militare, il serbatoio è pieno.",
            here(GREENHOUSE),
        )
        .with_aliases(["lanciafiamme"])
        .collectible(),
        Item::new(
            PAINKILLERS,
            "Analgesico",
            "Una scatola di fiale antidolorifiche.",
            here(INFIRMARY),
        )
        .with_aliases(["analgesico", "medicine", "fiale"])
        .collectible(),
        Item::new(
            SLIME,
            "Poltiglia",
            "Una massa rossastra che pulsa ancora.",
            here(KENNEL),
        )
        .with_aliases(["poltiglia", "massa"]),
        Item::new(
            TERRARIUM,
            "Terrario",
            "Una vasca di terra scura, più grande di un letto.",
            here(GREENHOUSE),
        )
        .with_aliases(["terrario", "terra"]),
        Item::new(
            RADIO,
            "Ricetrasmettitore",
            "Un ricetrasmettitore portatile con la batteria carica.",
            here(HUB),
        )
        .with_aliases(["ricetrasmettitore", "radio"])
        .collectible(),
    ]
}

fn characters() -> Vec<Character> {
    vec![
        Character::new(GUARD, "Guardia", Some(MESS)).with_aliases(["guardia", "soldato"]),
        Character::new(STRANGER, "Sconosciuto", Some(CORRIDOR))
            .with_aliases(["sconosciuto", "uomo", "superstite"]),
        Character::new(CREATURE, "Canide", Some(KENNEL))
            .with_aliases(["canide", "cosa", "creatura", "cane"]),
        Character::new(DOCTOR, "Gasly", Some(COMMS_ROOM)).with_aliases(["gasly", "dottore"]),
        Character::new(OPERATOR, "Mugs", None).with_aliases(["mugs"]),
    ]
}

fn dialogues() -> (Vec<PlayerLine>, Vec<CharacterReply>) {
    // (line, character, node, text, reply, reply text, next node)
    let script: [(u32, CharacterId, u32, &str, &str, Option<u32>); 8] = [
        (
            1,
            GUARD,
            1,
            "Che cosa è successo qui?",
            "Uno dei cani... non era un cane. Ha preso quasi tutti. \
             Il dottore si è chiuso nella sala comunicazioni.",
            Some(2),
        ),
        (
            2,
            GUARD,
            1,
            "Dove sono gli altri?",
            "Morti, o peggio. Non chiedermi altro.",
            Some(2),
        ),
        (
            3,
            GUARD,
            2,
            "Come entro nell'infermeria?",
            "Il codice è la data di nascita del dottore. C'è scritta nel suo dossier, \
             in laboratorio.",
            None,
        ),
        (
            4,
            STRANGER,
            1,
            "Calmati! Sono qui per aiutarvi.",
            "E come faccio a sapere che sei ancora umano?",
            Some(2),
        ),
        (
            5,
            STRANGER,
            2,
            "Il dottore ha bisogno di cure. Lasciami passare.",
            "Va bene... ma torna solo con le medicine e qualcosa per difenderci. \
             Un lanciafiamme.",
            None,
        ),
        (
            6,
            DOCTOR,
            1,
            "Dottore, sono venuto a prendervi.",
            "Stai indietro! Prima dimmi cosa hai portato.",
            Some(2),
        ),
        (
            7,
            DOCTOR,
            2,
            "Ho l'analgesico e il lanciafiamme. Fidati di me.",
            "Grazie al cielo. Accendi la radio grande e chiama la base McMurdo.",
            None,
        ),
        (
            8,
            OPERATOR,
            1,
            "Qui avamposto 31, mi ricevete?",
            "Forte e chiaro, avamposto 31. Restate dove siete, arriviamo all'alba.",
            None,
        ),
    ];

    let mut lines = Vec::with_capacity(script.len());
    let mut replies = Vec::with_capacity(script.len());
    for (id, character, node, line, reply, next) in script {
        lines.push(PlayerLine::new(
            LineId::new(id),
            character,
            node,
            line,
            ReplyId::new(id),
        ));
        replies.push(CharacterReply::new(ReplyId::new(id), character, reply, next));
    }
    (lines, replies)
}
