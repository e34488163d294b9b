//! Command catalog tests.

use outpost_parser::{Command, CommandCatalog, CommandKind, stdlib};

#[test]
fn every_verb_family_is_registered() {
    let catalog = stdlib::catalog();
    for kind in [
        CommandKind::Inventory,
        CommandKind::Talk,
        CommandKind::PickUp,
        CommandKind::Move,
        CommandKind::Quit,
        CommandKind::Observe,
        CommandKind::Use,
        CommandKind::Activate,
        CommandKind::Deactivate,
        CommandKind::Help,
        CommandKind::Read,
        CommandKind::Examine,
        CommandKind::Shoot,
        CommandKind::Save,
    ] {
        assert!(catalog.first_of(kind).is_some(), "{kind} missing");
    }
}

#[test]
fn aliases_resolve_to_their_family() {
    let catalog = stdlib::catalog();
    let kind = |word: &str| catalog.lookup(word).map(|c| c.kind);
    assert_eq!(kind("guarda"), Some(CommandKind::Observe));
    assert_eq!(kind("accendi"), Some(CommandKind::Activate));
    assert_eq!(kind("spegni"), Some(CommandKind::Deactivate));
    assert_eq!(kind("esci"), Some(CommandKind::Quit));
    assert_eq!(kind("consulta"), Some(CommandKind::Read));
    assert_eq!(kind("balla"), None);
}

#[test]
fn lookup_is_case_sensitive() {
    let catalog = stdlib::catalog();
    assert!(catalog.lookup("VAI").is_none());
    assert_eq!(catalog.lookup("Vai").map(|c| c.kind), Some(CommandKind::Move));
}

#[test]
fn earlier_registration_wins() {
    let catalog = CommandCatalog::new()
        .with(Command::new(CommandKind::Examine, "guarda"))
        .with(Command::new(CommandKind::Observe, "osserva").with_aliases(["guarda"]));
    assert_eq!(catalog.resolve("guarda"), Some(0));
    assert_eq!(catalog.lookup("guarda").map(|c| c.kind), Some(CommandKind::Examine));
}

#[test]
fn words_lists_names_and_aliases() {
    let catalog = CommandCatalog::new().with(Command::new(CommandKind::Use, "usa").with_aliases(["utilizza"]));
    assert_eq!(catalog.words(), ["usa", "utilizza"]);
}
