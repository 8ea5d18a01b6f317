pub mod filter_codec;
pub mod library;
pub mod relevance;

pub use library::{InMemoryLibraryStore, LibraryStore};
