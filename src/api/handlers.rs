use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_SIMILAR_COUNT;
use crate::error::{AppError, AppResult};
use crate::models::{Collection, Film, Genre, MoodOption, UserStats, DEFAULT_BADGE_STYLE};
use crate::services::insights::{self, NamedCount, RatingBucket, TasteProfile};
use crate::services::library::{self, LibraryCounts, LibraryEntry, LibraryFilter, SortKey};
use crate::services::recommendations::{self, Recommendation, WatchedGroup};

use super::AppState;

/// Trending defaults to the first ten catalog entries
const DEFAULT_TRENDING_COUNT: usize = 10;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct FilmListQuery {
    pub genre: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// One entry of the genre filter bar: "All" plus the eight genres
#[derive(Debug, Serialize)]
pub struct GenreOption {
    pub name: String,
    pub badge_style: &'static str,
}

/// A collection with its film references resolved
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub films: Vec<Film>,
}

impl CollectionResponse {
    fn new(collection: &Collection, films: Vec<&Film>) -> Self {
        Self {
            id: collection.id.clone(),
            name: collection.name.clone(),
            description: collection.description.clone(),
            films: films.into_iter().cloned().collect(),
        }
    }
}

/// Films matching a selected mood
#[derive(Debug, Serialize)]
pub struct MoodFilmsResponse {
    pub mood: MoodOption,
    pub films: Vec<Film>,
}

/// Library view with tab counts
#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub counts: LibraryCounts,
    pub films: Vec<LibraryEntry>,
}

/// Precomputed stats plus chart distributions
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: UserStats,
    pub rating_distribution: Vec<RatingBucket>,
    pub genre_distribution: Vec<NamedCount>,
}

fn parse_sort(sort: Option<&str>) -> AppResult<SortKey> {
    match sort {
        Some(s) => SortKey::parse(s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown sort key: {}", s))),
        None => Ok(SortKey::default()),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Lists films, optionally narrowed by genre selector and search text
///
/// An unknown genre yields an empty list rather than an error; `"All"`
/// and an absent genre both return the full catalog.
pub async fn list_films(
    State(state): State<AppState>,
    Query(params): Query<FilmListQuery>,
) -> AppResult<Json<Vec<Film>>> {
    let catalog = &state.catalog;

    let mut films: Vec<&Film> = match params.genre.as_deref() {
        Some(selector) => catalog.films_by_genre(selector),
        None => catalog.films().iter().collect(),
    };

    if let Some(query) = params.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        films.retain(|f| library::matches_search(f, query));
    }

    if params.sort.is_some() {
        let sort = parse_sort(params.sort.as_deref())?;
        library::sort_films(&mut films, sort);
    }

    Ok(Json(films.into_iter().cloned().collect()))
}

/// The featured film (first catalog entry)
pub async fn featured_film(State(state): State<AppState>) -> AppResult<Json<Film>> {
    state
        .catalog
        .featured()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("catalog is empty".to_string()))
}

/// The first films in catalog order
pub async fn trending_films(
    State(state): State<AppState>,
    Query(params): Query<CountQuery>,
) -> Json<Vec<Film>> {
    let count = params.count.unwrap_or(DEFAULT_TRENDING_COUNT);
    Json(state.catalog.trending(count).into_iter().cloned().collect())
}

/// Looks up a single film
///
/// An absent id is an expected outcome and maps to 404 so clients can
/// render their not-found state.
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Film>> {
    state
        .catalog
        .film_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Film {} not found", id)))
}

/// Same-genre recommendations for a film, with match scores attached
pub async fn similar_films(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CountQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let catalog = &state.catalog;
    let film = catalog
        .film_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Film {} not found", id)))?;

    let count = params.count.unwrap_or(DEFAULT_SIMILAR_COUNT);
    let picks = catalog
        .similar_films(film, count)
        .into_iter()
        .map(Recommendation::from)
        .collect();
    Ok(Json(picks))
}

/// The genre filter options: "All" plus the eight genres
pub async fn list_genres() -> Json<Vec<GenreOption>> {
    let mut options = vec![GenreOption {
        name: "All".to_string(),
        badge_style: DEFAULT_BADGE_STYLE,
    }];
    options.extend(Genre::ALL.iter().map(|g| GenreOption {
        name: g.to_string(),
        badge_style: g.badge_style(),
    }));
    Json(options)
}

/// All curated collections, unresolved
pub async fn list_collections(State(state): State<AppState>) -> Json<Vec<Collection>> {
    Json(state.catalog.collections().to_vec())
}

/// A single collection with its films resolved in collection order
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CollectionResponse>> {
    let catalog = &state.catalog;
    let collection = catalog
        .collection_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Collection {} not found", id)))?;

    let films = catalog.collection_films(collection);
    Ok(Json(CollectionResponse::new(collection, films)))
}

/// The mood taxonomy
pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodOption>> {
    Json(state.catalog.moods().to_vec())
}

/// Films matching a mood's genre list
pub async fn mood_films(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MoodFilmsResponse>> {
    let catalog = &state.catalog;
    let mood = catalog
        .mood_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Mood {} not found", id)))?;

    let films = catalog
        .films_for_mood(mood)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(MoodFilmsResponse {
        mood: mood.clone(),
        films,
    }))
}

/// The library view: filter tab, search text, sort order
pub async fn library(
    State(state): State<AppState>,
    Query(params): Query<LibraryQuery>,
) -> AppResult<Json<LibraryResponse>> {
    let filter = match params.filter.as_deref() {
        Some(s) => LibraryFilter::parse(s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown library filter: {}", s)))?,
        None => LibraryFilter::default(),
    };
    let sort = parse_sort(params.sort.as_deref())?;

    let catalog = &state.catalog;
    Ok(Json(LibraryResponse {
        counts: library::library_counts(catalog),
        films: library::library_entries(catalog, filter, params.search.as_deref(), sort),
    }))
}

/// Precomputed viewing stats plus chart distributions
pub async fn library_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let catalog = &state.catalog;
    let films = insights::user_films(catalog);

    Json(StatsResponse {
        stats: catalog.user().stats.clone(),
        rating_distribution: insights::rating_distribution(&catalog.user().ratings),
        genre_distribution: insights::genre_distribution(&films),
    })
}

/// The "because you watched" recommendation groups
pub async fn recommendations(State(state): State<AppState>) -> Json<Vec<WatchedGroup>> {
    Json(recommendations::because_you_watched(&state.catalog))
}

/// The user's taste profile: radar axes, top genres, preferred moods,
/// and average rating
pub async fn taste_profile(State(state): State<AppState>) -> Json<TasteProfile> {
    Json(insights::taste_profile(&state.catalog))
}
