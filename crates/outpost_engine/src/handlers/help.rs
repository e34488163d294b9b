use outpost_foundation::WorldState;
use outpost_parser::{CommandKind, Intent};

use crate::effects::{TurnEffects, TurnEvent};
use crate::handler::Handler;

/// Default instructions shown by the help command.
pub const INSTRUCTIONS: &str = "\
Sei l'ultimo soccorritore rimasto in piedi nell'avamposto. Trova i superstiti \
e chiama aiuto prima che sia troppo tardi.

COMANDI
  vai <nord|sud|est|ovest>   spostati in un'altra stanza
  osserva                    guarda la stanza in cui ti trovi
  esamina <oggetto>          esamina un oggetto da vicino
  prendi <oggetto>           raccogli un oggetto
  usa <oggetto>              usa un oggetto che porti con te
  leggi <oggetto>            leggi un documento
  attiva / disattiva <ogg.>  accendi o spegni un oggetto
  parla <personaggio>        parla con qualcuno
  spara <bersaglio>          usa la pistola
  inventario                 elenca gli oggetti che porti con te
  salva                      salva la partita
  fine                       esci dal gioco

Articoli e preposizioni vengono ignorati: \"prendi la pala\" equivale a \
\"prendi pala\".";

const TAKES_NO_ARGUMENTS: &str =
    "Comando non valido. 'aiuto' è un comando semplice e non accetta parametri.";

/// Shows the instructions.
#[derive(Clone, Debug)]
pub struct HelpHandler {
    instructions: String,
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new(INSTRUCTIONS)
    }
}

impl HelpHandler {
    /// Creates a handler showing the given instructions.
    #[must_use]
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }
}

impl Handler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn handle(&self, _: &mut WorldState, intent: &Intent, effects: &mut TurnEffects) -> String {
        if !intent.is(CommandKind::Help) {
            return String::new();
        }
        if intent.has_nouns() || intent.direction.is_some() {
            return TAKES_NO_ARGUMENTS.into();
        }
        effects.emit(TurnEvent::Document {
            title: "Istruzioni".into(),
            text: self.instructions.clone(),
        });
        "Lettura Istruzioni...".into()
    }
}
