//! Entity resolution against the demo outpost.

use outpost_foundation::Location;
use outpost_parser::{CommandParser, Intent, Scope};
use outpost_runtime::demo;

use crate::world_in;

fn intent(world: &outpost_foundation::WorldState, input: &str) -> Intent {
    CommandParser::default()
        .parse(input, &Scope::of(world))
        .into_intent()
        .unwrap_or_else(|| panic!("{input:?} parsed to nothing"))
}

#[test]
fn room_item_by_alias() {
    let world = world_in(demo::ENTRANCE);
    let intent = intent(&world, "prendi la torcia");
    assert_eq!(intent.room_item, Some(demo::TORCH));
    assert_eq!(intent.inventory_item, None);
}

#[test]
fn second_word_replaces_the_room_item() {
    let world = world_in(demo::DORMITORY);
    assert_eq!(intent(&world, "esamina diario foto").room_item, Some(demo::PHOTO));
    assert_eq!(intent(&world, "esamina foto diario").room_item, Some(demo::DIARY));
}

#[test]
fn unknown_second_word_clears_the_room_item() {
    let world = world_in(demo::DORMITORY);
    let intent = intent(&world, "esamina diario muro");
    assert_eq!(intent.room_item, None);
    assert_eq!(intent.inventory_item, None);
}

#[test]
fn carried_item_is_found_when_the_room_has_none() {
    let mut world = world_in(demo::ENTRANCE);
    assert!(world.relocate(demo::TORCH, Location::Inventory));
    let intent = intent(&world, "accendi torcia");
    assert_eq!(intent.room_item, None);
    assert_eq!(intent.inventory_item, Some(demo::TORCH));
}

#[test]
fn carried_item_falls_back_to_the_second_word() {
    let mut world = world_in(demo::HUB);
    assert!(world.relocate(demo::SHOVEL, Location::Inventory));
    assert_eq!(intent(&world, "usa subito pala").inventory_item, Some(demo::SHOVEL));
}

#[test]
fn items_elsewhere_are_out_of_scope() {
    let world = world_in(demo::HUB);
    let intent = intent(&world, "prendi torcia");
    assert!(!intent.has_nouns());
}

#[test]
fn characters_resolve_alongside_items() {
    let world = world_in(demo::MESS);
    assert_eq!(intent(&world, "esamina guardia").character, Some(demo::GUARD));
}

#[test]
fn shooting_scans_every_word_for_a_target() {
    let world = world_in(demo::KENNEL);
    let intent = intent(&world, "spara adesso subito al cane");
    assert_eq!(intent.character, Some(demo::CREATURE));
    assert_eq!(intent.room_item, None);
}

#[test]
fn talking_scans_every_word_for_a_target() {
    let world = world_in(demo::CORRIDOR);
    assert_eq!(intent(&world, "parla subito con uomo").character, Some(demo::STRANGER));
}

#[test]
fn talking_to_someone_absent_resolves_nobody() {
    let world = world_in(demo::HUB);
    let intent = intent(&world, "parla con guardia");
    assert_eq!(intent.character, None);
    assert!(!intent.is_malformed());
}

#[test]
fn input_case_is_ignored() {
    let world = world_in(demo::ENTRANCE);
    assert_eq!(intent(&world, "PRENDI Torcia").room_item, Some(demo::TORCH));
}
