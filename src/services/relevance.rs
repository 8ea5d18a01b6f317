//! Mood relevance scoring for fetched movies.

use crate::models::{Genre, Movie, MoodTable, ScoredMovie};

/// Points awarded for each mood keyword found in a movie's genres
pub const POINTS_PER_MATCH: u32 = 20;
/// Scores saturate here
pub const MAX_SCORE: u8 = 100;

/// Scores how well a movie's genres fit the selected moods, in `0..=100`
///
/// Each selected mood contributes [`POINTS_PER_MATCH`] for every one of its
/// keywords that appears inside any genre name (case-insensitive). Unknown
/// moods and unnamed genres contribute nothing. An empty mood selection
/// always scores 0.
pub fn score<M: AsRef<str>>(genres: &[Genre], moods: &[M], table: &MoodTable) -> u8 {
    if moods.is_empty() {
        return 0;
    }

    let genre_names: Vec<String> = genres
        .iter()
        .filter_map(|genre| genre.name.as_deref())
        .map(str::to_lowercase)
        .collect();

    let total = moods.iter().fold(0u32, |total, mood| {
        let matches = table
            .keywords(mood.as_ref())
            .iter()
            .filter(|keyword| genre_names.iter().any(|name| name.contains(*keyword)))
            .count() as u32;
        total.saturating_add(matches.saturating_mul(POINTS_PER_MATCH))
    });

    total.min(u32::from(MAX_SCORE)) as u8
}

/// Attaches a mood score to every movie, keeping the input order
pub fn annotate<M: AsRef<str>>(
    movies: Vec<Movie>,
    moods: &[M],
    table: &MoodTable,
) -> Vec<ScoredMovie> {
    movies
        .into_iter()
        .map(|movie| {
            let mood_score = score(&movie.genres, moods, table);
            ScoredMovie::new(movie, mood_score)
        })
        .collect()
}

/// Orders scored movies by descending score; ties keep their original order
pub fn rank(mut scored: Vec<ScoredMovie>) -> Vec<ScoredMovie> {
    scored.sort_by(|a, b| b.mood_score.cmp(&a.mood_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(names: &[&str]) -> Vec<Genre> {
        names.iter().map(|name| Genre::named(*name)).collect()
    }

    fn movie(id: u64, genre_names: &[&str]) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            release_date: None,
            genres: genres(genre_names),
            overview: None,
            poster_path: None,
            vote_average: None,
            director: None,
        }
    }

    #[test]
    fn test_empty_moods_score_zero() {
        let table = MoodTable::builtin();
        let no_moods: [&str; 0] = [];
        assert_eq!(score(&genres(&["Action", "Comedy"]), &no_moods, &table), 0);
        assert_eq!(score(&[], &no_moods, &table), 0);
    }

    #[test]
    fn test_action_adventure_scenario() {
        let table = MoodTable::builtin();
        let result = score(
            &genres(&["Action", "Adventure"]),
            &["Action-Packed", "Epic"],
            &table,
        );
        assert_eq!(result, 60);
    }

    #[test]
    fn test_case_insensitive() {
        let table = MoodTable::builtin();
        let upper = score(&genres(&["HORROR"]), &["Dark"], &table);
        let lower = score(&genres(&["horror"]), &["Dark"], &table);
        assert_eq!(upper, lower);
        assert_eq!(upper, 20);
    }

    #[test]
    fn test_unknown_mood_scores_zero() {
        let table = MoodTable::builtin();
        assert_eq!(score(&genres(&["comedy"]), &["NotARealMood"], &table), 0);
    }

    #[test]
    fn test_saturates_at_one_hundred() {
        let table = MoodTable::builtin();
        let all = genres(&[
            "Comedy", "Family", "Romance", "Music", "Drama", "Fantasy", "Adventure",
        ]);
        // Feel-Good 4 + Emotional 2 + Epic 2 = 8 matches
        assert_eq!(score(&all, &["Feel-Good", "Emotional", "Epic"], &table), 100);
        // exactly five matches
        assert_eq!(score(&all, &["Feel-Good", "Dark", "Action-Packed"], &table), 100);
    }

    #[test]
    fn test_keyword_counts_once_per_mood() {
        let table = MoodTable::builtin();
        // "war" appears in both genre names but counts once for Dark
        let result = score(&genres(&["War", "Warfare Documentary"]), &["Dark"], &table);
        assert_eq!(result, 20);
    }

    #[test]
    fn test_substring_matching() {
        let table = MoodTable::builtin();
        assert_eq!(score(&genres(&["Science Fiction"]), &["Mind-Bending"], &table), 20);
        assert_eq!(score(&genres(&["Action & Adventure"]), &["Action-Packed"], &table), 40);
    }

    #[test]
    fn test_mood_order_does_not_matter() {
        let table = MoodTable::builtin();
        let g = genres(&["Drama", "Romance", "History"]);
        let a = score(&g, &["Emotional", "Epic", "Feel-Good"], &table);
        let b = score(&g, &["Feel-Good", "Emotional", "Epic"], &table);
        assert_eq!(a, b);
        assert_eq!(a, 80);
    }

    #[test]
    fn test_unnamed_genres_are_ignored() {
        let table = MoodTable::builtin();
        let g = vec![Genre { id: Some(27), name: None }, Genre::named("Crime")];
        assert_eq!(score(&g, &["Dark"], &table), 20);
    }

    #[test]
    fn test_annotate_preserves_order() {
        let table = MoodTable::builtin();
        let movies = vec![movie(1, &["Comedy"]), movie(2, &["Horror", "Crime"])];
        let scored = annotate(movies, &["Dark"], &table);
        assert_eq!(scored[0].movie.id, 1);
        assert_eq!(scored[0].mood_score, 0);
        assert_eq!(scored[1].mood_score, 40);
    }

    #[test]
    fn test_annotate_fills_release_year() {
        let table = MoodTable::builtin();
        let mut dated = movie(5, &["War"]);
        dated.release_date = Some("1998-07-24".to_string());
        let scored = annotate(vec![dated, movie(6, &["War"])], &["Dark"], &table);
        assert_eq!(scored[0].release_year, Some(1998));
        assert_eq!(scored[1].release_year, None);
    }

    #[test]
    fn test_rank_is_stable_and_descending() {
        let table = MoodTable::builtin();
        let movies = vec![
            movie(1, &["Comedy"]),
            movie(2, &["Horror"]),
            movie(3, &["Drama"]),
            movie(4, &["Crime", "War"]),
        ];
        let ranked = rank(annotate(movies, &["Dark"], &table));
        let ids: Vec<u64> = ranked.iter().map(|m| m.movie.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }
}
