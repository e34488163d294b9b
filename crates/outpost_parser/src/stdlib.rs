//! Standard Italian vocabulary.
//!
//! Contains the default command catalog, direction keywords, and stopwords
//! for the outpost adventure.

use outpost_foundation::Direction;

use crate::resolver::DirectionWords;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Command, CommandCatalog, CommandKind};

/// Words dropped before parsing: articles, prepositions, conjunctions.
pub const STOPWORDS: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "l'", "un", "uno", "una", "un'", "a", "ad", "al", "allo",
    "alla", "ai", "agli", "alle", "da", "dal", "dallo", "dalla", "dai", "dagli", "dalle", "di",
    "del", "dello", "della", "dei", "degli", "delle", "in", "nel", "nello", "nella", "nei",
    "negli", "nelle", "su", "sul", "sullo", "sulla", "sui", "sugli", "sulle", "per", "tra", "fra",
    "e", "ed", "o", "verso", "mio", "mia", "questo", "questa", "quel", "quello", "quella",
];

/// Command table: kind, canonical name, aliases.
///
/// Tokens are lowercased before lookup and lookup is case-sensitive, so the
/// capitalized aliases can never match typed input. They are kept for
/// callers that resolve words without tokenizing.
pub const COMMANDS: &[(CommandKind, &str, &[&str])] = &[
    (CommandKind::Inventory, "inventario", &["Inventario"]),
    (CommandKind::Talk, "parla", &["Parla", "comunica", "dialoga", "discuti"]),
    (CommandKind::PickUp, "prendi", &["raccogli", "Prendi"]),
    (
        CommandKind::Move,
        "vai",
        &["Vai", "prosegui", "procedi", "dirigiti", "corri", "cammina", "muoviti"],
    ),
    (CommandKind::Quit, "fine", &["Fine", "termina", "exit", "Exit", "esci", "Esci"]),
    (CommandKind::Observe, "osserva", &["Osserva", "guarda", "Guarda"]),
    (CommandKind::Use, "usa", &["Usa", "utilizza"]),
    (
        CommandKind::Activate,
        "attiva",
        &["Attiva", "aziona", "innesca", "premi", "accendi"],
    ),
    (CommandKind::Deactivate, "disattiva", &["Disattiva", "spegni", "Spegni"]),
    (
        CommandKind::Help,
        "aiuto",
        &["Aiuto", "help", "Istruzioni", "istruzioni", "Help"],
    ),
    (CommandKind::Read, "leggi", &["Leggi", "consulta", "Consulta"]),
    (CommandKind::Examine, "esamina", &["Esamina", "analizza", "Analizza"]),
    (CommandKind::Shoot, "spara", &["Spara"]),
    (CommandKind::Save, "salva", &["Salva", "Salvataggio"]),
];

/// The default command catalog, in registration order.
#[must_use]
pub fn catalog() -> CommandCatalog {
    let mut catalog = CommandCatalog::new();
    for (kind, name, aliases) in COMMANDS {
        catalog.register(Command::new(*kind, *name).with_aliases(aliases.iter().copied()));
    }
    catalog
}

/// The four cardinal direction keywords.
#[must_use]
pub fn directions() -> DirectionWords {
    DirectionWords::new([
        ("nord", Direction::North),
        ("sud", Direction::South),
        ("est", Direction::East),
        ("ovest", Direction::West),
    ])
}

/// A tokenizer with the default stopwords.
#[must_use]
pub fn tokenizer() -> InputTokenizer {
    InputTokenizer::new(STOPWORDS)
}
