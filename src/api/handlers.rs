use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        AgeRating, FilterSelection, Genre, ListKind, MoodEntry, Movie, ScoredMovie, UserLibrary,
    },
    services::{filter_codec, library, relevance},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub selection: FilterSelection,
    #[serde(default)]
    pub current_query: String,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    /// Whether the address bar should be replaced
    pub changed: bool,
    pub query: String,
    /// True when the selection is the canonical "Clear All" state
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub moods: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    #[serde(default)]
    pub moods: Vec<String>,
    pub movies: Vec<Movie>,
    /// Return movies ordered by descending mood score instead of input order
    #[serde(default)]
    pub sort_by_score: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the mood tags and their genre keywords
pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    Json(state.mood_table.entries().to_vec())
}

/// Gets one mood's genre keywords
pub async fn get_mood(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> AppResult<Json<MoodEntry>> {
    state
        .mood_table
        .entry(&mood)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Mood not found: {}", mood)))
}

/// Lists the selectable age ratings
pub async fn list_ratings() -> Json<Vec<AgeRating>> {
    Json(AgeRating::ALL.to_vec())
}

/// Encodes a filter selection into its query string
pub async fn encode_filters(
    Extension(request_id): Extension<RequestId>,
    Json(selection): Json<FilterSelection>,
) -> AppResult<Json<EncodeResponse>> {
    if selection.has_inverted_years() {
        return Err(AppError::InvalidInput(format!(
            "year_from ({}) must not be after year_to ({})",
            selection.year_from, selection.year_to
        )));
    }

    let query = filter_codec::encode(&selection);
    tracing::info!(request_id = %request_id, query = %query, "Encoded filter selection");

    Ok(Json(EncodeResponse { query }))
}

/// Decodes the request's own query string into a filter selection
pub async fn decode_filters(RawQuery(query): RawQuery) -> Json<FilterSelection> {
    Json(filter_codec::decode(query.as_deref().unwrap_or_default()))
}

/// Compares a selection with the current address-bar query
pub async fn sync_filters(Json(request): Json<SyncRequest>) -> Json<SyncResponse> {
    let is_default = request.selection.is_default();
    match filter_codec::needs_update(&request.selection, &request.current_query) {
        Some(query) => Json(SyncResponse {
            changed: true,
            query,
            is_default,
        }),
        None => Json(SyncResponse {
            changed: false,
            query: filter_codec::encode(&request.selection),
            is_default,
        }),
    }
}

/// Scores a genre list against selected moods
pub async fn score_genres(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let score = relevance::score(&request.genres, request.moods.as_slice(), &state.mood_table);
    Json(ScoreResponse { score })
}

/// Annotates fetched movies with their mood scores
pub async fn annotate_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AnnotateRequest>,
) -> Json<Vec<ScoredMovie>> {
    tracing::info!(
        request_id = %request_id,
        movie_count = request.movies.len(),
        mood_count = request.moods.len(),
        "Annotating movies with mood scores"
    );

    let scored = relevance::annotate(request.movies, request.moods.as_slice(), &state.mood_table);
    if request.sort_by_score {
        Json(relevance::rank(scored))
    } else {
        Json(scored)
    }
}

/// Gets a user's liked and watch-later lists
pub async fn get_library(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserLibrary>> {
    let library = library::get_library(state.library.clone(), &username).await?;
    Ok(Json(library))
}

/// Toggles a movie in one of a user's lists
pub async fn toggle_library_entry(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((username, list, movie_id)): Path<(String, ListKind, u64)>,
) -> AppResult<Json<UserLibrary>> {
    tracing::info!(
        request_id = %request_id,
        list = ?list,
        movie_id,
        "Toggling library entry"
    );

    let library = library::toggle(state.library.clone(), &username, list, movie_id).await?;
    Ok(Json(library))
}
