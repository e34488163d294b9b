//! Configuration for a play session.

use std::time::Duration;

use outpost_engine::ticker::DEFAULT_PERIOD;
use outpost_foundation::{Error, Result};
use outpost_parser::{CommandCatalog, CommandParser, EntityResolver, InputTokenizer, stdlib};

/// Configuration for a play session.
///
/// Controls the antagonist's pace, the prompt, and the words the tokenizer
/// throws away.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Time between two warnings of the antagonist.
    pub ticker_period: Duration,

    /// Prompt shown before each line of input.
    pub prompt: String,

    /// Whether the REPL prints the welcome banner.
    pub show_banner: bool,

    /// Replacement stopword list; `None` keeps the standard Italian one.
    pub stopwords: Option<Vec<String>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ticker_period: DEFAULT_PERIOD,
            prompt: "> ".to_string(),
            show_banner: true,
            stopwords: None,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the ticker period.
    #[must_use]
    pub fn with_ticker_period(mut self, period: Duration) -> Self {
        self.ticker_period = period;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable or disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to replace the stopwords.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(stopwords.into_iter().map(Into::into).collect());
        self
    }

    /// Checks the values that cannot be expressed in the types.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero ticker period.
    pub fn validate(&self) -> Result<()> {
        if self.ticker_period.is_zero() {
            return Err(Error::config("ticker period must be greater than zero"));
        }
        Ok(())
    }

    /// Builds the parser for this configuration.
    ///
    /// `commands` replaces the standard catalog when content ships its own.
    #[must_use]
    pub fn parser(&self, commands: Option<CommandCatalog>) -> CommandParser {
        let tokenizer = match &self.stopwords {
            Some(words) => InputTokenizer::new(words.iter().map(String::as_str)),
            None => stdlib::tokenizer(),
        };
        CommandParser::new(
            tokenizer,
            commands.unwrap_or_else(stdlib::catalog),
            EntityResolver::new(stdlib::directions()),
        )
    }
}
