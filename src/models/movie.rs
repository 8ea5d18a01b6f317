use serde::{Deserialize, Serialize};

/// A genre object as supplied by the movie metadata provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Genre {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// A fetched movie, already enriched by the hosting application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub director: Option<String>,
}

impl Movie {
    /// Release year taken from a `YYYY-MM-DD` release date
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .and_then(|year| year.parse().ok())
    }
}

/// A movie annotated with its mood relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMovie {
    #[serde(flatten)]
    pub movie: Movie,
    /// Year parsed from `release_date`, for display next to the title
    pub release_year: Option<i32>,
    pub mood_score: u8,
}

impl ScoredMovie {
    pub fn new(movie: Movie, mood_score: u8) -> Self {
        Self {
            release_year: movie.release_year(),
            movie,
            mood_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_tolerates_missing_optional_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 603, "title": "The Matrix"}"#).unwrap();
        assert_eq!(movie.id, 603);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn test_genre_without_name() {
        let genre: Genre = serde_json::from_str(r#"{"id": 28}"#).unwrap();
        assert_eq!(genre.id, Some(28));
        assert_eq!(genre.name, None);
    }

    #[test]
    fn test_release_year() {
        let movie = Movie {
            id: 1,
            title: "Heat".to_string(),
            release_date: Some("1995-12-15".to_string()),
            genres: vec![Genre::named("Crime")],
            overview: None,
            poster_path: None,
            vote_average: Some(7.9),
            director: Some("Michael Mann".to_string()),
        };
        assert_eq!(movie.release_year(), Some(1995));
    }

    #[test]
    fn test_scored_movie_is_flattened() {
        let scored = ScoredMovie::new(
            Movie {
                id: 2,
                title: "Up".to_string(),
                release_date: Some("2009-05-29".to_string()),
                genres: vec![],
                overview: None,
                poster_path: None,
                vote_average: None,
                director: None,
            },
            40,
        );
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["title"], "Up");
        assert_eq!(json["release_date"], "2009-05-29");
        assert_eq!(json["release_year"], 2009);
        assert_eq!(json["mood_score"], 40);
    }
}
