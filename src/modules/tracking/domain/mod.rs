pub mod entities;
pub mod events;
pub mod repository;

pub use entities::{TrackedEntry, WatchStatus, WatchStatusMapping};
pub use events::EntryChange;
pub use repository::{CountWatch, EntryWatch, ListWatch, TrackedEntryRepository};
