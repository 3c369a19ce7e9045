//! Core types and logic for the Yin-Yang ensemble site.
//!
//! This crate provides everything the terminal front end renders:
//! - `Group` and its per-group profile content
//! - the static `EventRecord` collection and its catalog loader
//! - the schedule pipeline producing rendering-ready `DisplayEvent`s
//! - the persisted group selection

pub mod catalog;
pub mod display;
pub mod error;
pub mod event;
pub mod group;
pub mod profile;
pub mod schedule;
pub mod selection;

// Re-export the main types at crate root for convenience
pub use catalog::EventCatalog;
pub use display::DisplayEvent;
pub use error::{SiteError, SiteResult};
pub use event::{EventRecord, EventStatus};
pub use group::Group;
pub use profile::{GroupProfile, Theme};
pub use selection::{FileSelectionStore, MemorySelectionStore, SelectionStore};
