//! Dispatcher tests on the demo outpost.

use outpost_engine::narration::{NOT_UNDERSTOOD, room_banner};
use outpost_engine::{Dispatcher, OutputSink, TurnEvent};
use outpost_runtime::demo;

use crate::Game;

#[test]
fn standard_handlers_in_call_order() {
    let (sink, _rx) = OutputSink::channel();
    assert_eq!(
        Dispatcher::standard(sink).handler_names(),
        [
            "talk",
            "inventory",
            "examine",
            "move",
            "observe",
            "pickup",
            "read",
            "shoot",
            "activate",
            "help",
            "deactivate",
            "use",
            "save",
            "quit",
        ]
    );
}

#[test]
fn one_verb_one_answer() {
    let mut game = Game::new();
    for input in ["inventario", "osserva", "prendi torcia", "esamina torcia", "aiuto", "usa torcia"] {
        let report = game.play(input);
        assert_eq!(report.messages.len(), 1, "{input}: {:?}", report.messages);
    }
}

#[test]
fn sink_mirrors_the_report() {
    let mut game = Game::new();
    let mut expected = Vec::new();
    for input in ["vai nord", "balla", "prendi lista", "vai nord", "   "] {
        expected.extend(game.play(input).messages);
    }
    assert_eq!(game.drain(), expected);
    assert_eq!(expected.len(), 4);
}

#[test]
fn not_understood_touches_nothing() {
    let mut game = Game::new();
    let before = game.world.flags;
    let report = game.play("balla il tango");
    assert_eq!(report.messages, [NOT_UNDERSTOOD]);
    assert!(report.events.is_empty());
    assert_eq!(game.world.flags, before);
    assert_eq!(game.world.current_room_id(), demo::ENTRANCE);
}

#[test]
fn walking_announces_each_room() {
    let mut game = Game::new();
    let report = game.play("vai nord");
    assert_eq!(report.messages, [room_banner(game.world.room(demo::COMMON_ROOM).unwrap())]);
    assert!(report.has_event(&TurnEvent::RoomChanged(demo::COMMON_ROOM)));

    let report = game.play("vai ovest");
    assert_eq!(report.messages, ["Non c'è nulla in quella direzione."]);
    assert!(report.events.is_empty());
}

#[test]
fn the_entrance_cannot_be_left() {
    let mut game = Game::new();
    assert!(game.say("vai sud").starts_with("Non puoi andartene via."));
    assert_eq!(game.world.current_room_id(), demo::ENTRANCE);
}

#[test]
fn closing_ends_the_narration_stream() {
    let mut game = Game::new();
    game.play("osserva");
    game.dispatcher.close();
    assert_eq!(game.drain().len(), 1);
    assert!(game.narration.is_closed());

    let report = game.play("vai nord");
    assert_eq!(report.messages.len(), 1);
    assert!(game.drain().is_empty());
}
