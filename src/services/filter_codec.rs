//! Mirrors a [`FilterSelection`] into a URL query string and back.
//!
//! Encoding drops anything equal to its empty default, so decoding cannot
//! tell "explicitly set to the default" apart from "never set". Decoding is
//! total: malformed values fall back to defaults instead of failing.

use url::form_urlencoded;

use crate::models::{
    filter::push_unique, AgeRating, FilterSelection, DEFAULT_YEAR_FROM, DEFAULT_YEAR_TO,
};

pub const GENRES_KEY: &str = "genres";
pub const MOODS_KEY: &str = "moods";
pub const RATING_KEY: &str = "rating";
pub const YEAR_FROM_KEY: &str = "year_from";
pub const YEAR_TO_KEY: &str = "year_to";

const LIST_SEPARATOR: char = ',';

/// Serializes a selection into `genres`, `moods`, `rating`, `year_from`,
/// `year_to` pairs, in that order, omitting empty fields
pub fn encode(selection: &FilterSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !selection.genre_ids.is_empty() {
        serializer.append_pair(GENRES_KEY, &join(&selection.genre_ids));
    }
    if !selection.moods.is_empty() {
        serializer.append_pair(MOODS_KEY, &join(&selection.moods));
    }
    if !selection.ratings.is_empty() {
        serializer.append_pair(RATING_KEY, &join(&selection.ratings));
    }
    if selection.year_from != 0 {
        serializer.append_pair(YEAR_FROM_KEY, &selection.year_from.to_string());
    }
    if selection.year_to != 0 {
        serializer.append_pair(YEAR_TO_KEY, &selection.year_to.to_string());
    }

    serializer.finish()
}

/// Rebuilds a selection from a raw query string (leading `?` optional)
///
/// The first occurrence of a key wins and unknown keys are ignored. Genre
/// ids that are not integers and ratings outside the known vocabulary are
/// dropped.
pub fn decode(query: &str) -> FilterSelection {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut genres = None;
    let mut moods = None;
    let mut rating = None;
    let mut year_from = None;
    let mut year_to = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            GENRES_KEY => &mut genres,
            MOODS_KEY => &mut moods,
            RATING_KEY => &mut rating,
            YEAR_FROM_KEY => &mut year_from,
            YEAR_TO_KEY => &mut year_to,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterSelection {
        genre_ids: split_list(genres.as_deref(), |segment| segment.parse().ok()),
        moods: split_list(moods.as_deref(), |segment| Some(segment.to_string())),
        ratings: split_list(rating.as_deref(), |segment| segment.parse::<AgeRating>().ok()),
        year_from: parse_year(year_from.as_deref()).unwrap_or(DEFAULT_YEAR_FROM),
        year_to: parse_year(year_to.as_deref()).unwrap_or(DEFAULT_YEAR_TO),
    }
}

/// Returns the encoded selection only when it differs from the query
/// currently shown in the address bar
pub fn needs_update(selection: &FilterSelection, current_query: &str) -> Option<String> {
    let current = current_query.strip_prefix('?').unwrap_or(current_query);
    let encoded = encode(selection);
    (encoded != current).then_some(encoded)
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}

fn split_list<T, F>(value: Option<&str>, parse: F) -> Vec<T>
where
    T: PartialEq,
    F: Fn(&str) -> Option<T>,
{
    let mut items = Vec::new();
    for segment in value
        .unwrap_or_default()
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
    {
        if let Some(item) = parse(segment) {
            push_unique(&mut items, item);
        }
    }
    items
}

/// Leading-integer parse: surrounding whitespace and a sign are accepted,
/// anything after the digits is ignored. Zero counts as unset.
fn parse_year(value: Option<&str>) -> Option<i32> {
    let value = value?.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    let year = i32::try_from(if negative { -magnitude } else { magnitude }).ok()?;

    (year != 0).then_some(year)
}
