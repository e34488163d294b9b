//! Story beats on the demo outpost, driven through the standard handlers.

use outpost_engine::{Pending, TurnEvent};
use outpost_foundation::Location;
use outpost_runtime::demo;

use crate::Game;

fn carrying(game: &mut Game, items: &[outpost_foundation::ItemId]) {
    for item in items {
        assert!(game.world.relocate(*item, Location::Inventory));
    }
}

#[test]
fn the_kennel_encounter() {
    let mut game = Game::at(demo::CORRIDOR);
    carrying(&mut game, &[demo::TORCH]);

    assert!(game.say("vai est").starts_with("Ti trovi in: Canile"));
    assert_eq!(game.say("esamina poltiglia"), "Non puoi esaminare oggetti al buio.");
    assert_eq!(game.say("osserva"), "👁️: Non si vede niente.");
    assert!(game.say("accendi torcia").starts_with("Hai attivato la TORCIA."));

    let awakening = game.say("esamina poltiglia");
    assert!(awakening.contains("QUELLA COSA è viva"));
    assert!(game.world.flags.encounter_active());
    // No async runtime in a plain test: the story goes on without warnings.
    assert!(!game.dispatcher.ticker_running());

    assert!(game.say("vai ovest").starts_with("LA COSA blocca la porta."));
    assert!(game.say("spegni torcia").contains("Non posso spegere la torcia adesso!"));
    assert_eq!(game.say("prendi pala"), "Al momento non puoi raccogliere questo oggetto");
    assert_eq!(game.say("salva"), "Salvataggio non consentito in questo momento");
    assert_eq!(game.say("fine"), "Non puoi uscire in questo momento!");

    let shots: Vec<String> = (0..4).map(|_| game.say("spara alla cosa")).collect();
    assert!(shots[0].starts_with("Spari!"));
    assert!(shots[3].starts_with("Colpo finale!"));
    assert!(game.world.flags.boss_defeated);
    assert_eq!(game.say("spara cosa"), "La creatura è già morta.");

    assert_eq!(game.say("prendi pala"), "Hai raccolto: Pala");
    assert!(game.say("esamina poltiglia").contains("solo delle ossa umane"));

    let report = game.play("vai ovest");
    assert_eq!(report.messages[0], "(La torcia è stata disattivata)");
    assert!(report.has_event(&TurnEvent::RoomChanged(demo::CORRIDOR)));
    assert!(!game.world.flags.torch_lit);
}

#[test]
fn the_creature_hides_until_woken() {
    let mut game = Game::at(demo::KENNEL);
    assert_eq!(game.say("spara cosa"), "Bersaglio non identificato");
    assert_eq!(game.say("parla con cosa"), "Personaggio inserito non trovato");
    assert_eq!(game.say("spara"), "Bersaglio non identificato.");
}

#[test]
fn the_infirmary_door() {
    let mut game = Game::at(demo::WING_END);

    let report = game.play("vai ovest");
    assert_eq!(report.pending, Some(Pending::DoorCode { room: demo::INFIRMARY }));
    assert!(report.has_event(&TurnEvent::AwaitingDoorCode(demo::INFIRMARY)));

    assert_eq!(game.say("vai ovest"), "Codice errato. La porta rimane chiusa.");
    assert_eq!(game.world.current_room_id(), demo::WING_END);

    game.play("vai ovest");
    let report = game.play(demo::INFIRMARY_CODE);
    assert_eq!(report.messages[0], "La porta è stata sbloccata.");
    assert!(report.messages[1].starts_with("Ti trovi in: Infermeria"));

    assert_eq!(game.say("prendi analgesico"), "Hai raccolto: Analgesico");
    assert!(game.world.current_room().updated_active);

    game.play("vai est");
    assert!(!game.play("vai ovest").is_suspended());
    assert_eq!(game.world.current_room_id(), demo::INFIRMARY);
}

#[test]
fn digging_up_the_flamethrower() {
    let mut game = Game::at(demo::WING_MIDDLE);
    carrying(&mut game, &[demo::SHOVEL]);

    game.play("vai ovest");
    game.play(demo::GREENHOUSE_CODE);
    assert_eq!(game.world.current_room_id(), demo::GREENHOUSE);

    assert_eq!(game.say("prendi lanciafiamme"), "Al momento non puoi raccogliere questo oggetto");
    assert_eq!(game.say("prendi terrario"), "Non puoi raccogliere questo oggetto.");
    assert!(game.say("usa pala").contains("LANCIAFIAMME"));
    assert!(game.world.flags.ground_dug);
    assert_eq!(game.say("prendi lanciafiamme"), "Hai raccolto: Lanciafiamme");
    assert!(game.say("usa pala").starts_with("L'oggetto specificato non può essere"));
}

#[test]
fn the_survivor_guards_the_comms_room() {
    let mut game = Game::at(demo::CORRIDOR);

    assert_eq!(game.say("parla con uomo"), "Personaggio inserito non trovato");
    assert!(game.say("vai nord").contains("STAI INDIETRO"));
    assert!(game.world.flags.stranger_confronted);
    assert!(game.say("vai nord").contains("Devo PARLARGLI"));

    let report = game.play("parla con uomo");
    assert!(report.text().contains("1. Calmati! Sono qui per aiutarvi."));
    assert!(report.has_event(&TurnEvent::AwaitingDialogueChoice));

    game.play("1");
    assert!(game.world.flags.stranger_persuaded);
    let report = game.play("1");
    assert!(report.text().ends_with("Il dialogo è terminato."));

    assert!(game.say("vai nord").contains("lanciafiamme che le medicine"));
    assert_eq!(game.world.current_room_id(), demo::CORRIDOR);

    carrying(&mut game, &[demo::FLAMETHROWER, demo::PAINKILLERS]);
    let report = game.play("vai nord");
    assert!(report.has_event(&TurnEvent::RoomChanged(demo::COMMS_ROOM)));
}

#[test]
fn reading_raises_a_document() {
    let mut game = Game::at(demo::LAB);
    assert_eq!(game.say("prendi fascicolo"), "Hai raccolto: Dossier");

    let report = game.play("leggi dossier");
    assert_eq!(report.messages, ["Lettura di Dossier..."]);
    let Some(TurnEvent::Document { title, text }) = report.events.first() else {
        panic!("expected a document, got {:?}", report.events);
    };
    assert_eq!(title, "Dossier");
    assert!(text.contains("20/05/1982"));

    assert_eq!(game.say("leggi torcia"), "Oggetto da leggere non identificato.");
}

#[test]
fn save_and_quit_only_notify() {
    let mut game = Game::new();
    let report = game.play("salva");
    assert!(report.messages.is_empty());
    assert_eq!(report.events, [TurnEvent::SaveRequested]);

    let report = game.play("fine");
    assert!(report.messages.is_empty());
    assert_eq!(report.events, [TurnEvent::QuitRequested]);
}
