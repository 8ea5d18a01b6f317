use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};

/// Lower bound of the release-year range when none is selected
pub const DEFAULT_YEAR_FROM: i32 = 1990;
/// Upper bound of the release-year range when none is selected
pub const DEFAULT_YEAR_TO: i32 = 2024;

/// US age certification a movie can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

impl AgeRating {
    /// All ratings in the order the filter panel lists them
    pub const ALL: [AgeRating; 5] = [
        AgeRating::G,
        AgeRating::Pg,
        AgeRating::Pg13,
        AgeRating::R,
        AgeRating::Nc17,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRating::G => "G",
            AgeRating::Pg => "PG",
            AgeRating::Pg13 => "PG-13",
            AgeRating::R => "R",
            AgeRating::Nc17 => "NC-17",
        }
    }
}

impl Display for AgeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of the known certifications
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown age rating: {0}")]
pub struct UnknownAgeRating(pub String);

impl FromStr for AgeRating {
    type Err = UnknownAgeRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeRating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| UnknownAgeRating(s.to_string()))
    }
}

/// The user's current discovery criteria
///
/// Set-valued fields keep insertion order and never hold duplicates. A
/// selection is treated as a value: every change produces a new selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    #[serde(deserialize_with = "deserialize_unique")]
    pub genre_ids: Vec<u32>,
    #[serde(deserialize_with = "deserialize_unique")]
    pub moods: Vec<String>,
    #[serde(deserialize_with = "deserialize_unique")]
    pub ratings: Vec<AgeRating>,
    pub year_from: i32,
    pub year_to: i32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            genre_ids: Vec::new(),
            moods: Vec::new(),
            ratings: Vec::new(),
            year_from: DEFAULT_YEAR_FROM,
            year_to: DEFAULT_YEAR_TO,
        }
    }
}

impl FilterSelection {
    /// Adds a genre id unless it is already selected
    pub fn with_genre(mut self, genre_id: u32) -> Self {
        push_unique(&mut self.genre_ids, genre_id);
        self
    }

    /// Adds a mood tag unless it is already selected
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        push_unique(&mut self.moods, mood.into());
        self
    }

    /// Adds an age rating unless it is already selected
    pub fn with_rating(mut self, rating: AgeRating) -> Self {
        push_unique(&mut self.ratings, rating);
        self
    }

    /// Replaces the release-year range; the bounds are stored as given
    pub fn with_years(mut self, year_from: i32, year_to: i32) -> Self {
        self.year_from = year_from;
        self.year_to = year_to;
        self
    }

    /// Selects the genre if absent, deselects it if present
    pub fn toggle_genre(mut self, genre_id: u32) -> Self {
        toggle(&mut self.genre_ids, genre_id);
        self
    }

    /// Selects the mood if absent, deselects it if present
    pub fn toggle_mood(mut self, mood: &str) -> Self {
        toggle(&mut self.moods, mood.to_string());
        self
    }

    /// Selects the rating if absent, deselects it if present
    pub fn toggle_rating(mut self, rating: AgeRating) -> Self {
        toggle(&mut self.ratings, rating);
        self
    }

    /// True when both year bounds are set and the lower lies after the upper
    ///
    /// A zero bound is unset (the codec omits it), so it never inverts a range.
    pub fn has_inverted_years(&self) -> bool {
        self.year_from != 0 && self.year_to != 0 && self.year_from > self.year_to
    }

    /// True when nothing beyond the canonical defaults is selected
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Collects a JSON list keeping only the first occurrence of each member
fn deserialize_unique<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq,
{
    let raw = Vec::<T>::deserialize(deserializer)?;
    let mut items = Vec::with_capacity(raw.len());
    for item in raw {
        push_unique(&mut items, item);
    }
    Ok(items)
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}
