use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Film;

/// Which slice of the library a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    /// Watchlist and rated films combined, deduplicated
    #[default]
    All,
    Watchlist,
    Rated,
}

impl LibraryFilter {
    /// Parses a filter name; unknown names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(LibraryFilter::All),
            "watchlist" => Some(LibraryFilter::Watchlist),
            "rated" => Some(LibraryFilter::Rated),
            _ => None,
        }
    }
}

/// Sort order for film lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog rating, highest first
    #[default]
    Rating,
    /// Insertion order (watchlist order, then rating order)
    Date,
    /// Title, A to Z
    Title,
    /// Release year, newest first
    Year,
}

impl SortKey {
    /// Parses a sort key name; unknown names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rating" => Some(SortKey::Rating),
            "date" => Some(SortKey::Date),
            "title" => Some(SortKey::Title),
            "year" => Some(SortKey::Year),
            _ => None,
        }
    }
}

/// A library entry: a film plus the user's rating when one exists
#[derive(Debug, Clone, Serialize)]
pub struct LibraryEntry {
    pub film: Film,
    pub user_rating: Option<f64>,
    pub date_rated: Option<NaiveDate>,
}

/// Film counts per filter tab
#[derive(Debug, Clone, Serialize)]
pub struct LibraryCounts {
    pub all: usize,
    pub watchlist: usize,
    pub rated: usize,
}

/// Case-insensitive substring match over title, director, and genre
pub fn matches_search(film: &Film, query: &str) -> bool {
    let q = query.to_lowercase();
    film.title.to_lowercase().contains(&q)
        || film.director.to_lowercase().contains(&q)
        || film.genre.as_str().to_lowercase().contains(&q)
}

/// Sorts films in place by the given key
///
/// All sorts are stable; `Date` keeps insertion order untouched.
pub fn sort_films(films: &mut [&Film], sort: SortKey) {
    match sort {
        SortKey::Rating => films.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Title => films.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Year => films.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Date => {}
    }
}

/// Counts for the All / Watchlist / Rated tabs
pub fn library_counts(catalog: &Catalog) -> LibraryCounts {
    let user = catalog.user();
    LibraryCounts {
        all: catalog.films_by_ids(user.combined_film_ids()).len(),
        watchlist: catalog.films_by_ids(&user.watchlist).len(),
        rated: catalog.films_by_ids(user.rated_film_ids()).len(),
    }
}

/// Builds the library view: pool by filter tab, narrow by search, order
/// by sort key, then attach the user's ratings
pub fn library_entries(
    catalog: &Catalog,
    filter: LibraryFilter,
    search: Option<&str>,
    sort: SortKey,
) -> Vec<LibraryEntry> {
    let user = catalog.user();
    let mut pool: Vec<&Film> = match filter {
        LibraryFilter::All => catalog.films_by_ids(user.combined_film_ids()),
        LibraryFilter::Watchlist => catalog.films_by_ids(&user.watchlist),
        LibraryFilter::Rated => catalog.films_by_ids(user.rated_film_ids()),
    };

    if let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) {
        pool.retain(|f| matches_search(f, query));
    }

    sort_films(&mut pool, sort);

    pool.into_iter()
        .map(|film| {
            let rating = user.rating_for(&film.id);
            LibraryEntry {
                film: film.clone(),
                user_rating: rating.map(|r| r.rating),
                date_rated: rating.map(|r| r.date_rated),
            }
        })
        .collect()
}
