use std::sync::Arc;

use crate::models::MoodTable;
use crate::services::{InMemoryLibraryStore, LibraryStore};

/// Shared application state
///
/// Both members are created once at startup. The mood table is read-only;
/// the library store is only changed through its named operations.
#[derive(Clone)]
pub struct AppState {
    pub mood_table: Arc<MoodTable>,
    pub library: Arc<dyn LibraryStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with the built-in mood table and an empty in-memory library store
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryLibraryStore::new()))
    }

    /// Creates state backed by the given library store
    pub fn with_store(library: Arc<dyn LibraryStore>) -> Self {
        Self {
            mood_table: Arc::new(MoodTable::builtin()),
            library,
        }
    }
}
