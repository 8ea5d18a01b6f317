use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes and request tracing
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Vocabulary
        .route("/moods", get(handlers::list_moods))
        .route("/moods/:mood", get(handlers::get_mood))
        .route("/ratings", get(handlers::list_ratings))
        // Filter codec
        .route("/filters/encode", post(handlers::encode_filters))
        .route("/filters/decode", get(handlers::decode_filters))
        .route("/filters/sync", post(handlers::sync_filters))
        // Relevance scoring
        .route("/score", post(handlers::score_genres))
        .route("/movies/annotate", post(handlers::annotate_movies))
        // Personal lists
        .route("/library/:username", get(handlers::get_library))
        .route(
            "/library/:username/:list/:movie_id",
            post(handlers::toggle_library_entry),
        )
}
