//! Taste-profile and chart aggregates derived from the user's library.
//!
//! Every computation here is a pure function of the static dataset. The
//! shared `count_by` helper backs each aggregate so grouping semantics
//! (first-seen key order, stable ties) cannot drift between consumers.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Film, Genre, UserRating};

/// Fixed axes of the genre-affinity radar, in display order
pub const RADAR_AXES: [Genre; 6] = [
    Genre::Action,
    Genre::Drama,
    Genre::Comedy,
    Genre::SciFi,
    Genre::Thriller,
    Genre::Romance,
];

const TOP_GENRE_LIMIT: usize = 3;
const TOP_MOOD_TAG_LIMIT: usize = 5;

/// Counts items by a derived key, preserving first-seen key order
pub fn count_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, usize)>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for item in items {
        let k = key(&item);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

/// The user's combined watchlist and rated films, deduplicated by id
///
/// Watchlist entries come first, then rated films; ids that do not
/// resolve are skipped.
pub fn user_films(catalog: &Catalog) -> Vec<&Film> {
    catalog.films_by_ids(catalog.user().combined_film_ids())
}

/// One axis of the genre-affinity radar, scaled 0-100
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AffinityAxis {
    pub genre: Genre,
    pub value: u32,
}

/// Genre affinity across the six radar axes
///
/// Each axis is the user's film count for that genre, normalized by the
/// maximum count across the axes (floor 1, so an empty library yields
/// all zeros rather than dividing by zero).
pub fn genre_affinity(films: &[&Film]) -> Vec<AffinityAxis> {
    let counts = count_by(films.iter().copied(), |f| f.genre);
    let count_for = |genre: Genre| {
        counts
            .iter()
            .find(|(g, _)| *g == genre)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };

    let max = RADAR_AXES
        .iter()
        .map(|&g| count_for(g))
        .max()
        .unwrap_or(0)
        .max(1);

    RADAR_AXES
        .iter()
        .map(|&genre| AffinityAxis {
            genre,
            value: (count_for(genre) as f64 / max as f64 * 100.0).round() as u32,
        })
        .collect()
}

/// A genre's share of the user's library
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreShare {
    pub genre: Genre,
    pub count: usize,
    pub percentage: u32,
}

/// The user's top three genres by film count
///
/// Ties keep first-seen order; percentage is relative to the combined
/// unique film count.
pub fn top_genres(films: &[&Film]) -> Vec<GenreShare> {
    let total = films.len().max(1);
    let mut counts = count_by(films.iter().copied(), |f| f.genre);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_GENRE_LIMIT)
        .map(|(genre, count)| GenreShare {
            genre,
            count,
            percentage: (count as f64 / total as f64 * 100.0).round() as u32,
        })
        .collect()
}

/// The user's five most frequent mood tags
///
/// Tags are counted in film order; ties keep first-encounter order.
pub fn preferred_mood_tags(films: &[&Film]) -> Vec<String> {
    let mut counts = count_by(
        films.iter().flat_map(|f| &f.mood_tags),
        |tag| tag.as_str(),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_MOOD_TAG_LIMIT)
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Arithmetic mean of the user's ratings; 0.0 when no ratings exist
pub fn average_rating(ratings: &[UserRating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(|r| r.rating).sum::<f64>() / ratings.len() as f64
}

/// One star bucket of the rating histogram
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatingBucket {
    pub stars: String,
    pub count: usize,
}

/// Ratings bucketed by nearest star, clamped to [1, 5]
///
/// All five buckets are always present, in ascending star order.
pub fn rating_distribution(ratings: &[UserRating]) -> Vec<RatingBucket> {
    let mut buckets = [0usize; 5];
    for r in ratings {
        let star = (r.rating.round() as i64).clamp(1, 5) as usize;
        buckets[star - 1] += 1;
    }
    buckets
        .iter()
        .enumerate()
        .map(|(i, &count)| RatingBucket {
            stars: if i == 0 {
                "1 star".to_string()
            } else {
                format!("{} stars", i + 1)
            },
            count,
        })
        .collect()
}

/// A labeled count for chart consumers
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NamedCount {
    pub name: String,
    pub value: usize,
}

/// Film counts grouped by genre, in first-seen order
pub fn genre_distribution(films: &[&Film]) -> Vec<NamedCount> {
    count_by(films.iter().copied(), |f| f.genre)
        .into_iter()
        .map(|(genre, value)| NamedCount {
            name: genre.to_string(),
            value,
        })
        .collect()
}

/// The full taste profile served to the AI Picks page
#[derive(Debug, Clone, Serialize)]
pub struct TasteProfile {
    pub genre_affinity: Vec<AffinityAxis>,
    pub top_genres: Vec<GenreShare>,
    pub preferred_mood_tags: Vec<String>,
    pub average_rating: f64,
}

pub fn taste_profile(catalog: &Catalog) -> TasteProfile {
    let films = user_films(catalog);
    TasteProfile {
        genre_affinity: genre_affinity(&films),
        top_genres: top_genres(&films),
        preferred_mood_tags: preferred_mood_tags(&films),
        average_rating: average_rating(&catalog.user().ratings),
    }
}
