//! The demo played from the first room to the climax.

use outpost_engine::{DialogueOutcome, Trigger, TurnEvent, TurnReport};
use outpost_runtime::demo::{self, INFIRMARY_CODE};
use outpost_runtime::session::SAVE_UNAVAILABLE;
use outpost_runtime::{Repl, ScriptEditor, Session, SessionConfig};

use crate::{WALKTHROUGH, commands, demo_session, drain};

#[test]
fn walkthrough_reaches_the_climax() {
    let (mut session, mut narration) = demo_session(&SessionConfig::default());
    let mut expected = vec![session.begin()];
    let mut climax = false;

    for line in commands(WALKTHROUGH) {
        let report = session.handle_line(line);
        assert!(!report.messages.is_empty(), "{line:?} said nothing");
        climax |= report.has_event(&TurnEvent::ClimaxReached);
        expected.extend(report.messages);
    }

    assert!(climax);
    assert_eq!(drain(&mut narration), expected);

    let world = session.world();
    assert_eq!(world.current_room_id(), demo::COMMS_ROOM);
    for item in [
        demo::TORCH,
        demo::RADIO,
        demo::DOSSIER,
        demo::SHOVEL,
        demo::PHOTO,
        demo::FLAMETHROWER,
        demo::PAINKILLERS,
    ] {
        assert!(world.carries(item), "{item} not carried");
    }
    assert!(world.flags.boss_defeated);
    assert!(world.flags.ground_dug);
    assert!(!world.flags.stranger_confronted);
    assert!(session.pending().is_none());
}

#[test]
fn nothing_moves_after_the_climax() {
    let (mut session, mut narration) = demo_session(&SessionConfig::default());
    for line in commands(WALKTHROUGH) {
        session.handle_line(line);
    }
    drain(&mut narration);

    assert!(session.climax_reached());
    assert!(session.is_finished());
    assert!(!session.ticker_running());
    for line in ["vai sud", "inventario", "aiuto"] {
        assert_eq!(session.handle_line(line), TurnReport::default());
    }
    assert_eq!(session.world().current_room_id(), demo::COMMS_ROOM);
    assert!(drain(&mut narration).is_empty());
}

#[test]
fn the_climax_leads_to_the_rescue_call() {
    let (mut session, _narration) = demo_session(&SessionConfig::default());
    for line in commands(WALKTHROUGH) {
        session.handle_line(line);
    }

    let report = session.start_scripted_dialogue(demo::OPERATOR, Some("soccorsi".into()));
    assert!(report.is_suspended());
    let report = session.handle_line("1");
    assert!(report.text().contains("arriviamo all'alba"));
    assert!(report.has_event(&TurnEvent::DialogueEnded(DialogueOutcome::TerminateAndTrigger(
        Trigger::Continuation("soccorsi".into())
    ))));

    assert!(session.handle_line("fine").messages.is_empty());
    assert!(session.is_finished());
    assert_eq!(session.handle_line("vai sud"), TurnReport::default());
}

#[test]
fn documents_are_laid_out_between_rules() {
    let (mut session, _narration) = demo_session(&SessionConfig::default());
    session.handle_line("vai nord");
    let report = session.handle_line("consulta la lista");
    assert_eq!(report.messages[0], "Lettura di Lista Dipendenti...");
    assert!(report.messages[1].starts_with("LISTA DIPENDENTI\n---"));
    assert!(report.messages[1].contains("Mugs (radiofonista)"));
}

#[test]
fn save_is_answered_by_the_session() {
    let (mut session, _narration) = demo_session(&SessionConfig::default());
    let report = session.handle_line("salva");
    assert_eq!(report.messages, [SAVE_UNAVAILABLE]);
    assert!(report.has_event(&TurnEvent::SaveRequested));
}

#[test]
fn a_door_code_line_is_not_a_command() {
    let (mut session, _narration) = demo_session(&SessionConfig::default());
    for line in ["vai nord", "vai nord", "vai ovest", "vai nord", "vai nord", "vai ovest"] {
        session.handle_line(line);
    }
    assert!(session.pending().is_some());

    // The code prompt swallows whatever comes next, verbs included.
    let report = session.handle_line("aiuto");
    assert_eq!(report.messages, ["Codice errato. La porta rimane chiusa."]);
    assert!(session.pending().is_none());

    session.handle_line("vai ovest");
    session.handle_line(INFIRMARY_CODE);
    assert_eq!(session.world().current_room_id(), demo::INFIRMARY);
}

#[test]
fn the_script_plays_through_the_repl() {
    let session = Session::demo(&SessionConfig::default()).unwrap();
    let editor = ScriptEditor::from_script(WALKTHROUGH);
    let mut repl = Repl::with_editor(editor, session).without_banner();

    repl.run().unwrap();

    assert!(repl.session().is_finished());
    assert_eq!(repl.session().world().current_room_id(), demo::COMMS_ROOM);
    assert!(!repl.session().ticker_running());
}
