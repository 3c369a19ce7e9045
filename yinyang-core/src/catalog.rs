//! Loading and validating the static event collection.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};
use crate::event::EventRecord;

/// Event data compiled into the library at build time.
const BUNDLED_EVENTS: &str = include_str!("../data/events.json");

#[derive(Deserialize)]
struct EventsFile {
    events: Vec<EventRecord>,
}

/// The immutable event collection, loaded whole and validated once.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<EventRecord>,
}

impl EventCatalog {
    /// Load the collection bundled into the crate.
    pub fn bundled() -> SiteResult<Self> {
        Self::from_json(BUNDLED_EVENTS)
    }

    /// Load a collection from an events file on disk.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a collection from JSON text.
    ///
    /// Fails on malformed JSON, unknown group/status literals, and
    /// duplicate event ids.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let file: EventsFile =
            serde_json::from_str(json).map_err(|e| SiteError::Data(e.to_string()))?;

        let mut seen = HashSet::new();
        for event in &file.events {
            if !seen.insert(event.id.as_str()) {
                return Err(SiteError::DuplicateEventId(event.id.clone()));
            }
        }

        Ok(EventCatalog { events: file.events })
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn find(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
