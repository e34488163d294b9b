//! Content files.
//!
//! A content file is one JSON document holding a [`ContentSnapshot`] and,
//! optionally, a command catalog that replaces the standard Italian verbs:
//!
//! ```json
//! {
//!   "scenario": { "start_room": 1, ... },
//!   "rooms": [ ... ],
//!   "items": [ ... ],
//!   "commands": [ { "kind": "Move", "name": "vai", "aliases": ["corri"] } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use outpost_foundation::{ContentSnapshot, Error, ErrorContext, Result};
use outpost_parser::CommandCatalog;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything a session is built from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameContent {
    /// World tables and story bindings.
    #[serde(flatten)]
    pub snapshot: ContentSnapshot,
    /// Verb catalog; `None` uses the standard one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<CommandCatalog>,
}

impl From<ContentSnapshot> for GameContent {
    fn from(snapshot: ContentSnapshot) -> Self {
        Self {
            snapshot,
            commands: None,
        }
    }
}

impl GameContent {
    /// Parses content from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error if the text is not a content document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::invalid_content(e.to_string()))
    }

    /// Renders the content as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::invalid_content(e.to_string()))
    }

    /// Loads content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new().with_source(path.display().to_string());

        let text = fs::read_to_string(path).map_err(|e| Error::from(e).with_context(context()))?;
        let content = Self::from_json(&text).map_err(|e| e.with_context(context()))?;
        info!(
            path = %path.display(),
            rooms = content.snapshot.rooms.len(),
            items = content.snapshot.items.len(),
            "content loaded"
        );
        Ok(content)
    }
}
