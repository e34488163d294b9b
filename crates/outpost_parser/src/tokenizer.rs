//! Input tokenization.
//!
//! Converts raw player input into a sequence of lowercase words with the
//! stopwords removed.

use std::collections::HashSet;
use std::io::BufRead;

use outpost_foundation::Result;

/// Splits player input into words.
#[derive(Clone, Debug, Default)]
pub struct InputTokenizer {
    stopwords: HashSet<String>,
}

impl InputTokenizer {
    /// Creates a tokenizer that drops the given words.
    ///
    /// Stopwords are compared after lowercasing, so they are stored lowercase.
    #[must_use]
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Creates a tokenizer from a word list with one stopword per line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            words.push(line?);
        }
        Ok(Self::new(words))
    }

    /// Whether `word` is dropped during tokenization.
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of registered stopwords.
    #[must_use]
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Tokenizes a raw input string.
    ///
    /// - Converts the input to lowercase
    /// - Splits on any run of whitespace
    /// - Drops stopwords, keeping the order of the remaining words
    ///
    /// Empty, blank, or all-stopword input yields an empty vector.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        input
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}
