pub mod filter;
pub mod library;
pub mod mood;
pub mod movie;

pub use filter::{AgeRating, FilterSelection, DEFAULT_YEAR_FROM, DEFAULT_YEAR_TO};
pub use library::{ListKind, UserLibrary};
pub use mood::{MoodEntry, MoodTable};
pub use movie::{Genre, Movie, ScoredMovie};
