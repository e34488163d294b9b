//! Conversations with the demo cast.

use outpost_engine::dialogue::{DIALOGUE_OVER, NOT_A_NUMBER};
use outpost_engine::{
    DialogueOutcome, DialogueSession, DialogueState, Pending, Trigger, TurnEvent,
};
use outpost_runtime::demo;

use crate::Game;

#[test]
fn the_guard_answers_in_two_steps() {
    let mut game = Game::at(demo::MESS);

    let opening = game.say("parla con guardia");
    assert!(opening.contains("1. Che cosa è successo qui?\n2. Dove sono gli altri?"));

    let report = game.play("due");
    assert!(report.text().starts_with(NOT_A_NUMBER));
    assert!(report.is_suspended());

    assert!(game.say("5").starts_with("Scelta non valida (scegli tra 1 e 2)."));

    let answer = game.say(" 2 ");
    assert!(answer.starts_with("Guardia:\nMorti, o peggio."));
    assert!(answer.contains("1. Come entro nell'infermeria?"));
    let Some(Pending::Dialogue(session)) = &game.pending else {
        panic!("the guard should still be waiting");
    };
    assert_eq!(session.state(), DialogueState::AwaitingChoice(2));

    let report = game.play("1");
    assert!(report.text().contains("data di nascita del dottore"));
    assert!(report.text().ends_with(DIALOGUE_OVER));
    assert!(report.has_event(&TurnEvent::DialogueEnded(DialogueOutcome::Terminate)));
    assert!(game.pending.is_none());
    assert!(game.world.character(demo::GUARD).unwrap().interacted);

    assert_eq!(game.say("parla con guardia"), "Questo personaggio non ha più nulla da dirti.");
}

#[test]
fn other_verbs_wait_while_a_choice_is_open() {
    let mut game = Game::at(demo::MESS);
    game.play("parla con guardia");
    let report = game.play("vai ovest");
    assert!(report.text().starts_with(NOT_A_NUMBER));
    assert_eq!(game.world.current_room_id(), demo::MESS);
}

#[test]
fn the_doctor_brings_the_climax() {
    let mut game = Game::at(demo::COMMS_ROOM);
    game.play("parla con dottore");
    game.play("1");
    let report = game.play("1");
    assert!(report.text().contains("chiama la base McMurdo"));
    assert!(report.has_event(&TurnEvent::ClimaxReached));
    assert!(report.has_event(&TurnEvent::DialogueEnded(DialogueOutcome::TerminateAndTrigger(
        Trigger::Climax
    ))));
}

#[test]
fn a_scripted_call_reports_its_continuation() {
    let mut game = Game::at(demo::COMMS_ROOM);
    let session = DialogueSession::new(demo::OPERATOR).with_continuation("soccorsi");

    let report = game.dispatcher.start_dialogue(&mut game.world, session);
    assert!(report.text().contains("1. Qui avamposto 31, mi ricevete?"));
    game.pending = report.pending;

    let report = game.play("1");
    assert!(report.text().starts_with("Mugs:\nForte e chiaro"));
    assert!(report.has_event(&TurnEvent::DialogueEnded(DialogueOutcome::TerminateAndTrigger(
        Trigger::Continuation("soccorsi".into())
    ))));
    assert!(!report.has_event(&TurnEvent::ClimaxReached));
}
