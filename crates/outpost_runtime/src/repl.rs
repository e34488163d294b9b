//! The interactive game loop.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};

use outpost_foundation::Result;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
///
/// Turns run on the calling thread. Narration, including the antagonist's
/// warnings that arrive between turns, is drained by a printer thread.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Scene-setting text printed after the banner.
    intro: Option<String>,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(session.keywords());
        Self {
            editor,
            session,
            show_banner: true,
            intro: None,
            prompt: "> ".to_string(),
        }
    }

    /// Applies the prompt and banner settings of a session configuration.
    #[must_use]
    pub fn configured(mut self, config: &SessionConfig) -> Self {
        self.prompt.clone_from(&config.prompt);
        self.show_banner = config.show_banner;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the text printed after the banner.
    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the game until the player quits or input ends.
    ///
    /// The session is closed on the way out, and every narration message
    /// emitted before that is printed before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or printing fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }
        let printer = self.start_printer();
        self.session.begin();

        let result = self.play();

        self.session.close();
        if let Some(printer) = printer {
            if printer.join().is_err() {
                warn!("narration printer panicked");
            }
        }
        if self.show_banner {
            println!("A presto!");
        }
        result
    }

    fn play(&mut self) -> Result<()> {
        while !self.session.is_finished() {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    self.session.handle_line(&line);
                }
                ReadResult::Interrupted => debug!("input interrupted"),
                ReadResult::Eof => break,
            }
        }
        Ok(())
    }

    /// Drains the narration channel on its own thread.
    ///
    /// The thread ends when the channel closes, that is after
    /// [`Session::close`] and once the ticker task has wound down.
    fn start_printer(&mut self) -> Option<JoinHandle<()>> {
        let mut narration = self.session.take_narration()?;
        let mut printer = self.editor.printer();
        Some(thread::spawn(move || {
            while let Some(text) = narration.blocking_recv() {
                if let Err(e) = printer.print(text) {
                    warn!(error = %e, "narration printer failed");
                    break;
                }
            }
        }))
    }

    fn print_banner(&self) -> Result<()> {
        println!("\x1b[1mOutpost\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Digita \"aiuto\" per le istruzioni, \"fine\" per uscire.");
        println!();
        if let Some(intro) = &self.intro {
            println!("{intro}");
            println!();
        }
        io::stdout().flush()?;
        Ok(())
    }
}
