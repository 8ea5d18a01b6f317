use serde::Serialize;

/// Compiled-in mood tags and the genre keywords each one correlates with.
///
/// Keywords are lowercase and matched as substrings of a movie's genre
/// names, so "science fiction" matches TMDB's "Science Fiction" genre.
const BUILTIN_MOODS: &[(&str, &[&str])] = &[
    ("Feel-Good", &["comedy", "family", "romance", "music"]),
    ("Mind-Bending", &["thriller", "science fiction", "mystery"]),
    ("Dark", &["horror", "crime", "war"]),
    ("Action-Packed", &["action", "adventure"]),
    ("Emotional", &["drama", "romance"]),
    ("Epic", &["fantasy", "adventure", "history"]),
];

/// One row of the mood table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEntry {
    pub mood: &'static str,
    pub keywords: &'static [&'static str],
}

/// Read-only mapping from mood tag to genre keywords
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTable {
    entries: Vec<MoodEntry>,
}

impl Default for MoodTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MoodTable {
    /// The six moods offered by the filter panel
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_MOODS
                .iter()
                .map(|&(mood, keywords)| MoodEntry { mood, keywords })
                .collect(),
        }
    }

    /// Looks up a mood by its exact tag
    pub fn entry(&self, mood: &str) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.mood == mood)
    }

    /// Keywords for a mood, or an empty slice when the mood is unknown
    pub fn keywords(&self, mood: &str) -> &[&'static str] {
        self.entry(mood).map(|entry| entry.keywords).unwrap_or(&[])
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.entry(mood).is_some()
    }

    /// Mood tags in table order
    pub fn moods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.mood)
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }
}
