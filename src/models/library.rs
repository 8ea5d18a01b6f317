use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which personal list a movie is toggled in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Movies the user liked
    Liked,
    /// Movies saved for later
    WatchLater,
}

/// A user's liked and watch-later movie ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserLibrary {
    pub username: String,
    pub liked: Vec<u64>,
    pub watch_later: Vec<u64>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserLibrary {
    /// Creates an empty library for a user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            liked: Vec::new(),
            watch_later: Vec::new(),
            updated_at: None,
        }
    }

    /// Toggles a movie in the liked list, returning whether it is now liked
    pub fn toggle_liked(&mut self, movie_id: u64) -> bool {
        self.toggle(ListKind::Liked, movie_id)
    }

    /// Toggles a movie in the watch-later list, returning whether it is now saved
    pub fn toggle_watch_later(&mut self, movie_id: u64) -> bool {
        self.toggle(ListKind::WatchLater, movie_id)
    }

    pub fn toggle(&mut self, kind: ListKind, movie_id: u64) -> bool {
        let list = match kind {
            ListKind::Liked => &mut self.liked,
            ListKind::WatchLater => &mut self.watch_later,
        };

        let now_present = if let Some(pos) = list.iter().position(|id| *id == movie_id) {
            list.remove(pos);
            false
        } else {
            list.push(movie_id);
            true
        };

        self.updated_at = Some(Utc::now());
        now_present
    }

    pub fn is_liked(&self, movie_id: u64) -> bool {
        self.liked.contains(&movie_id)
    }

    pub fn is_watch_later(&self, movie_id: u64) -> bool {
        self.watch_later.contains(&movie_id)
    }
}
