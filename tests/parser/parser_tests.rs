//! Command parser tests.

use outpost_foundation::Direction;
use outpost_parser::{
    Command, CommandCatalog, CommandKind, CommandParser, InputTokenizer, ParseResult, Scope,
    stdlib,
};
use outpost_runtime::demo;

use crate::world_in;

fn parse(input: &str) -> ParseResult {
    let world = world_in(demo::HUB);
    CommandParser::default().parse(input, &Scope::of(&world))
}

fn direction(input: &str) -> Option<Direction> {
    parse(input).into_intent().and_then(|intent| intent.direction)
}

#[test]
fn blank_and_stopword_lines_are_empty() {
    assert_eq!(parse(""), ParseResult::Empty);
    assert_eq!(parse("   "), ParseResult::Empty);
    assert_eq!(parse("la dei sul"), ParseResult::Empty);
}

#[test]
fn unknown_verbs_are_not_understood() {
    for input in ["balla", "nord", "radio prendi"] {
        let intent = parse(input).into_intent().unwrap();
        assert!(!intent.is_understood(), "{input}");
        assert!(!intent.has_nouns());
    }
}

#[test]
fn every_direction_word() {
    assert_eq!(direction("vai nord"), Some(Direction::North));
    assert_eq!(direction("vai a sud"), Some(Direction::South));
    assert_eq!(direction("corri verso est"), Some(Direction::East));
    assert_eq!(direction("cammina ovest"), Some(Direction::West));
}

#[test]
fn unknown_direction_is_invalid() {
    assert_eq!(direction("vai alto"), Some(Direction::Invalid));
}

#[test]
fn move_with_two_words_takes_the_generic_path() {
    let intent = parse("vai nord radio").into_intent().unwrap();
    assert!(intent.is(CommandKind::Move));
    assert_eq!(intent.direction, None);
    assert_eq!(intent.room_item, None);
}

#[test]
fn observe_takes_no_arguments() {
    assert_eq!(direction("osserva"), None);
    assert_eq!(direction("guarda radio"), Some(Direction::Invalid));
}

#[test]
fn talk_without_words_is_malformed() {
    let intent = parse("parla").into_intent().unwrap();
    assert!(intent.is(CommandKind::Talk));
    assert!(intent.is_malformed());
}

#[test]
fn generic_verbs_carry_every_noun_slot() {
    let intent = parse("prendi ricetrasmettitore").into_intent().unwrap();
    assert!(intent.is(CommandKind::PickUp));
    assert_eq!(intent.room_item, Some(demo::RADIO));
    assert_eq!(intent.direction, None);
}

#[test]
fn bare_verbs_have_no_nouns() {
    for (input, kind) in [
        ("inventario", CommandKind::Inventory),
        ("aiuto", CommandKind::Help),
        ("salva", CommandKind::Save),
        ("esci", CommandKind::Quit),
    ] {
        let intent = parse(input).into_intent().unwrap();
        assert!(intent.is(kind), "{input}");
        assert!(!intent.has_nouns());
    }
}

#[test]
fn custom_catalog_replaces_the_verbs() {
    let catalog = CommandCatalog::new()
        .with(Command::new(CommandKind::Move, "go").with_aliases(["walk"]))
        .with(Command::new(CommandKind::PickUp, "take"));
    let parser = CommandParser::default().with_catalog(catalog);
    let world = world_in(demo::HUB);
    let scope = Scope::of(&world);

    let intent = parser.parse("walk nord", &scope).into_intent().unwrap();
    assert!(intent.is(CommandKind::Move));
    assert_eq!(intent.direction, Some(Direction::North));
    assert!(!parser.parse("vai nord", &scope).into_intent().unwrap().is_understood());
}

#[test]
fn custom_stopwords() {
    let parser = CommandParser::default().with_tokenizer(InputTokenizer::new(["per", "favore"]));
    let world = world_in(demo::HUB);
    let scope = Scope::of(&world);

    let intent = parser.parse("vai nord per favore", &scope).into_intent().unwrap();
    assert_eq!(intent.direction, Some(Direction::North));
    // Articles are ordinary words once the standard list is replaced.
    let intent = parser.parse("prendi il radio", &scope).into_intent().unwrap();
    assert_eq!(intent.room_item, None);
    assert_eq!(stdlib::tokenizer().tokenize("prendi il radio"), ["prendi", "radio"]);
}
