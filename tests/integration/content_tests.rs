//! Sessions built from content files.

use std::fs;
use std::path::PathBuf;

use outpost_foundation::{ErrorKind, RoomId};
use outpost_parser::{Command, CommandCatalog, CommandKind};
use outpost_runtime::{GameContent, Session, SessionConfig, demo};

/// A file in the temp directory, removed on drop.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("outpost-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn english() -> CommandCatalog {
    CommandCatalog::new()
        .with(Command::new(CommandKind::Move, "go").with_aliases(["walk"]))
        .with(Command::new(CommandKind::PickUp, "take"))
        .with(Command::new(CommandKind::Inventory, "inventory"))
        .with(Command::new(CommandKind::Quit, "quit"))
}

#[test]
fn the_demo_survives_a_file_round_trip() {
    let json = demo::content().to_json().unwrap();
    let file = TempFile::new("demo.json", &json);

    let content = GameContent::load(&file.0).unwrap();
    assert!(content.commands.is_none());
    let mut session = Session::new(content, &SessionConfig::default()).unwrap();
    session.handle_line("vai nord");
    assert_eq!(session.world().current_room_id(), demo::COMMON_ROOM);
}

#[test]
fn a_content_file_brings_its_own_verbs() {
    let mut content = demo::content();
    content.commands = Some(english());
    let file = TempFile::new("english.json", &content.to_json().unwrap());

    let content = GameContent::load(&file.0).unwrap();
    let mut session = Session::new(content, &SessionConfig::default()).unwrap();

    assert_eq!(session.handle_line("take torcia").text(), "Hai raccolto: Torcia");
    session.handle_line("walk nord");
    assert_eq!(session.world().current_room_id(), demo::COMMON_ROOM);
    assert!(session.handle_line("vai nord").text().starts_with("Non ho capito"));

    let keywords = session.keywords();
    assert!(keywords.contains(&"walk".to_string()));
    assert!(!keywords.contains(&"vai".to_string()));

    session.handle_line("quit");
    assert!(session.is_finished());
}

#[test]
fn custom_stopwords_apply_to_file_content() {
    let config = SessionConfig::new().with_stopwords(["bitte"]);
    let mut session = Session::new(demo::content(), &config).unwrap();
    session.handle_line("vai bitte nord");
    assert_eq!(session.world().current_room_id(), demo::COMMON_ROOM);
    // Italian articles are plain words now.
    assert_eq!(
        session.handle_line("prendi la lista").text(),
        "Oggetto da raccogliere non identificato."
    );
}

#[test]
fn broken_references_are_rejected() {
    let mut content = demo::content();
    content.snapshot.scenario.start_room = RoomId::new(99);
    let error = Session::new(content, &SessionConfig::default()).unwrap_err();
    assert!(matches!(error.kind, ErrorKind::UnknownRoom(room) if room == RoomId::new(99)));
}

#[test]
fn unreadable_files_are_errors() {
    let missing = std::env::temp_dir().join("outpost-no-such-file.json");
    assert!(GameContent::load(&missing).is_err());

    let file = TempFile::new("broken.json", "{ \"rooms\": [ ");
    let error = GameContent::load(&file.0).unwrap_err();
    assert!(matches!(error.kind, ErrorKind::InvalidContent(_)));
}

#[test]
fn a_zero_ticker_period_is_refused() {
    let config = SessionConfig::new().with_ticker_period(std::time::Duration::ZERO);
    let error = Session::demo(&config).unwrap_err();
    assert!(matches!(error.kind, ErrorKind::Config(_)));
}
