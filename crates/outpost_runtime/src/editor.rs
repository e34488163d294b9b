//! Line editor abstraction for the REPL.
//!
//! The REPL reads through the [`LineEditor`] trait and prints narration
//! through a [`NarrationPrinter`] obtained from the same editor. The
//! rustyline implementation hands out its external printer, so ticker
//! warnings arriving while the player types are drawn above the prompt
//! instead of through it.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::io::{self, Write};

use outpost_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{
    Completer, Config, Context, Editor, ExternalPrinter, Helper, Hinter, Validator,
};
use tracing::debug;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Writes narration to the player from any thread.
pub trait NarrationPrinter: Send {
    /// Prints one whole message.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn print(&mut self, text: String) -> Result<()>;
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for keywords.
    fn set_keywords(&mut self, keywords: Vec<String>);

    /// A printer that can run on another thread while a line is being read.
    fn printer(&mut self) -> Box<dyn NarrationPrinter>;
}

// =============================================================================
// Printers
// =============================================================================

/// Prints each message to stdout followed by a blank line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPrinter;

impl NarrationPrinter for StdoutPrinter {
    fn print(&mut self, text: String) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}\n")?;
        out.flush()?;
        Ok(())
    }
}

/// Adapts rustyline's external printer.
struct TerminalPrinter<P>(P);

impl<P: ExternalPrinter + Send> NarrationPrinter for TerminalPrinter<P> {
    fn print(&mut self, text: String) -> Result<()> {
        self.0
            .print(format!("{text}\n\n"))
            .map_err(|e| Error::io(e.to_string()))
    }
}

// =============================================================================
// Rustyline
// =============================================================================

/// Helper for rustyline that provides completion, hints, and prompt color.
#[derive(Helper, Completer, Hinter, Validator)]
struct OutpostHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for OutpostHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor against verbs and directions.
#[derive(Default)]
struct KeywordCompleter {
    keywords: Vec<String>,
}

impl KeywordCompleter {
    fn candidates(&self, word: &str) -> Vec<Pair> {
        let word = word.to_lowercase();
        self.keywords
            .iter()
            .filter(|kw| kw.starts_with(&word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect()
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        Ok((start, self.candidates(&line[start..pos])))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<OutpostHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(|e| Error::config(e.to_string()))?
            .build();

        let helper = OutpostHelper {
            completer: KeywordCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::io(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }

    fn printer(&mut self) -> Box<dyn NarrationPrinter> {
        match self.editor.create_external_printer() {
            Ok(printer) => Box::new(TerminalPrinter(printer)),
            Err(e) => {
                debug!(error = %e, "no external printer; narration goes to stdout");
                Box::new(StdoutPrinter)
            }
        }
    }
}

// =============================================================================
// Scripts
// =============================================================================

/// Feeds lines from a script instead of the terminal.
#[derive(Debug, Default)]
pub struct ScriptEditor {
    lines: VecDeque<String>,
}

impl ScriptEditor {
    /// Creates an editor that yields `lines` in order, then EOF.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an editor from script text, one command per line.
    ///
    /// Lines starting with `#` are comments.
    #[must_use]
    pub fn from_script(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Lines not read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineEditor for ScriptEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}

    fn printer(&mut self) -> Box<dyn NarrationPrinter> {
        Box::new(StdoutPrinter)
    }
}
