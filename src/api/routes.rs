use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/films", get(handlers::list_films))
        .route("/films/featured", get(handlers::featured_film))
        .route("/films/trending", get(handlers::trending_films))
        .route("/films/:id", get(handlers::get_film))
        .route("/films/:id/similar", get(handlers::similar_films))
        .route("/genres", get(handlers::list_genres))
        // Curated collections
        .route("/collections", get(handlers::list_collections))
        .route("/collections/:id", get(handlers::get_collection))
        // Mood taxonomy
        .route("/moods", get(handlers::list_moods))
        .route("/moods/:id/films", get(handlers::mood_films))
        // Personal library
        .route("/library", get(handlers::library))
        .route("/library/stats", get(handlers::library_stats))
        // Recommendations
        .route("/recommendations", get(handlers::recommendations))
        .route("/profile/taste", get(handlers::taste_profile))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
