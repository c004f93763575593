use axum_test::TestServer;

use cineverse_api::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::seeded();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_films_returns_full_catalog() {
    let server = create_test_server();
    let response = server.get("/films").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    assert_eq!(films.len(), 20);
    assert_eq!(films[0]["title"], "Void Protocol");
    assert_eq!(films[0]["genre"], "Sci-Fi");
}

#[tokio::test]
async fn test_filter_films_by_genre() {
    let server = create_test_server();
    let response = server.get("/films").add_query_param("genre", "Sci-Fi").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    let ids: Vec<&str> = films.iter().map(|f| f["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "9", "14"]);
}

#[tokio::test]
async fn test_genre_all_sentinel_returns_everything() {
    let server = create_test_server();
    let response = server.get("/films").add_query_param("genre", "All").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    assert_eq!(films.len(), 20);
    assert_eq!(films[0]["id"], "1");
}

#[tokio::test]
async fn test_unknown_genre_yields_empty_list_not_error() {
    let server = create_test_server();
    let response = server.get("/films").add_query_param("genre", "Documentary").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    assert!(films.is_empty());
}

#[tokio::test]
async fn test_search_films_by_director() {
    let server = create_test_server();
    let response = server.get("/films").add_query_param("search", "takahashi").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    let ids: Vec<&str> = films.iter().map(|f| f["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["3", "17"]);
}

#[tokio::test]
async fn test_get_film_by_id() {
    let server = create_test_server();
    let response = server.get("/films/5").await;
    response.assert_status_ok();

    let film: serde_json::Value = response.json();
    assert_eq!(film["title"], "Hollow Saints");
    assert_eq!(film["genre"], "Thriller");
    assert_eq!(film["runtime"], 141);
}

#[tokio::test]
async fn test_get_film_not_found() {
    let server = create_test_server();
    let response = server.get("/films/999").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_similar_films_share_genre_and_exclude_self() {
    let server = create_test_server();
    let response = server.get("/films/1/similar").await;
    response.assert_status_ok();

    let picks: Vec<serde_json::Value> = response.json();
    // Two other Sci-Fi films exist
    assert_eq!(picks.len(), 2);
    for pick in &picks {
        assert_eq!(pick["film"]["genre"], "Sci-Fi");
        assert_ne!(pick["film"]["id"], "1");
        let score = pick["match_score"].as_u64().unwrap();
        assert!((82..=97).contains(&score));
    }
}

#[tokio::test]
async fn test_similar_films_respects_count() {
    let server = create_test_server();
    let response = server
        .get("/films/5/similar")
        .add_query_param("count", "1")
        .await;
    response.assert_status_ok();

    let picks: Vec<serde_json::Value> = response.json();
    assert_eq!(picks.len(), 1);
}

#[tokio::test]
async fn test_genre_options_include_all_sentinel() {
    let server = create_test_server();
    let response = server.get("/genres").await;
    response.assert_status_ok();

    let options: Vec<serde_json::Value> = response.json();
    assert_eq!(options.len(), 9);
    assert_eq!(options[0]["name"], "All");
    assert_eq!(options[3]["name"], "Sci-Fi");
}

#[tokio::test]
async fn test_collection_resolves_films_in_order() {
    let server = create_test_server();
    let response = server.get("/collections/col-1").await;
    response.assert_status_ok();

    let collection: serde_json::Value = response.json();
    assert_eq!(collection["name"], "Mind-Bending Sci-Fi");
    let ids: Vec<&str> = collection["films"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "9", "14", "5", "19"]);
}

#[tokio::test]
async fn test_collection_not_found() {
    let server = create_test_server();
    let response = server.get("/collections/col-99").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mood_films_match_mood_genres() {
    let server = create_test_server();
    let response = server.get("/moods/mind-bending/films").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["mood"]["label"], "Mind-Bending");

    let films = body["films"].as_array().unwrap();
    // Three Sci-Fi and three Thriller films
    assert_eq!(films.len(), 6);
    for film in films {
        let genre = film["genre"].as_str().unwrap();
        assert!(genre == "Sci-Fi" || genre == "Thriller");
    }
}

#[tokio::test]
async fn test_library_counts_and_default_view() {
    let server = create_test_server();
    let response = server.get("/library").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["counts"]["all"], 14);
    assert_eq!(body["counts"]["watchlist"], 8);
    assert_eq!(body["counts"]["rated"], 6);
    assert_eq!(body["films"].as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn test_library_rated_filter_carries_ratings() {
    let server = create_test_server();
    let response = server
        .get("/library")
        .add_query_param("filter", "rated")
        .add_query_param("sort", "date")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let films = body["films"].as_array().unwrap();
    assert_eq!(films.len(), 6);
    assert_eq!(films[0]["film"]["id"], "2");
    assert_eq!(films[0]["user_rating"], 4.5);
    assert_eq!(films[0]["date_rated"], "2024-12-15");
}

#[tokio::test]
async fn test_library_search() {
    let server = create_test_server();
    let response = server
        .get("/library")
        .add_query_param("search", "novak")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let films = body["films"].as_array().unwrap();
    assert_eq!(films.len(), 2);
}

#[tokio::test]
async fn test_library_unknown_sort_is_rejected() {
    let server = create_test_server();
    let response = server
        .get("/library")
        .add_query_param("sort", "runtime")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("sort"));
}

#[tokio::test]
async fn test_library_stats_distributions() {
    let server = create_test_server();
    let response = server.get("/library/stats").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["stats"]["total_hours_watched"], 142);
    assert_eq!(body["stats"]["favorite_genre"], "Sci-Fi");
    assert_eq!(body["stats"]["monthly_activity"].as_array().unwrap().len(), 6);

    let buckets = body["rating_distribution"].as_array().unwrap();
    assert_eq!(buckets.len(), 5);
    let total: u64 = buckets.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 6);

    let genres = body["genre_distribution"].as_array().unwrap();
    let total: u64 = genres.iter().map(|g| g["value"].as_u64().unwrap()).sum();
    assert_eq!(total, 14);
}

#[tokio::test]
async fn test_recommendations_groups() {
    let server = create_test_server();
    let response = server.get("/recommendations").await;
    response.assert_status_ok();

    let groups: Vec<serde_json::Value> = response.json();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["watched"]["title"], "The Last Meridian");
    assert_eq!(groups[1]["watched"]["title"], "Sunlit Detour");

    let picks = groups[1]["picks"].as_array().unwrap();
    assert!(!picks.is_empty() && picks.len() <= 4);
    for pick in picks {
        assert_eq!(pick["film"]["genre"], "Comedy");
    }
}

#[tokio::test]
async fn test_taste_profile() {
    let server = create_test_server();
    let response = server.get("/profile/taste").await;
    response.assert_status_ok();

    let profile: serde_json::Value = response.json();
    let axes = profile["genre_affinity"].as_array().unwrap();
    assert_eq!(axes.len(), 6);

    let scifi = axes.iter().find(|a| a["genre"] == "Sci-Fi").unwrap();
    assert_eq!(scifi["value"], 100);

    assert_eq!(profile["top_genres"][0]["genre"], "Sci-Fi");
    assert_eq!(
        profile["preferred_mood_tags"].as_array().unwrap().len(),
        5
    );
}

#[tokio::test]
async fn test_trending_defaults_to_ten() {
    let server = create_test_server();
    let response = server.get("/films/trending").await;
    response.assert_status_ok();

    let films: Vec<serde_json::Value> = response.json();
    assert_eq!(films.len(), 10);
    assert_eq!(films[0]["id"], "1");
}

#[tokio::test]
async fn test_featured_film() {
    let server = create_test_server();
    let response = server.get("/films/featured").await;
    response.assert_status_ok();

    let film: serde_json::Value = response.json();
    assert_eq!(film["id"], "1");
    assert_eq!(film["title"], "Void Protocol");
}

#[tokio::test]
async fn test_queries_are_idempotent() {
    let server = create_test_server();
    let first = server.get("/films").add_query_param("genre", "Thriller").await;
    let second = server.get("/films").add_query_param("genre", "Thriller").await;
    assert_eq!(first.text(), second.text());
}
