mod seed;

use crate::models::{Collection, Film, Genre, MoodOption, UserData};

/// Default number of same-genre recommendations
pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Genre selector that returns the full, unfiltered catalog
pub const ALL_GENRES_SELECTOR: &str = "All";

/// Immutable catalog of films, curated collections, mood taxonomy, and the
/// simulated user's library
///
/// Built once at startup and never mutated, so every query is a pure
/// function of the dataset and its arguments. Constructed from explicit
/// lists to keep substitute datasets easy in tests; `seeded()` loads the
/// built-in production data.
#[derive(Debug, Clone)]
pub struct Catalog {
    films: Vec<Film>,
    collections: Vec<Collection>,
    moods: Vec<MoodOption>,
    user: UserData,
}

impl Catalog {
    /// Creates a catalog from explicit datasets
    pub fn new(
        films: Vec<Film>,
        collections: Vec<Collection>,
        moods: Vec<MoodOption>,
        user: UserData,
    ) -> Self {
        Self {
            films,
            collections,
            moods,
            user,
        }
    }

    /// Catalog populated with the built-in dataset
    pub fn seeded() -> Self {
        seed::catalog()
    }

    /// All films in catalog order
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// All curated collections
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// All mood taxonomy entries
    pub fn moods(&self) -> &[MoodOption] {
        &self.moods
    }

    /// The simulated user's library data
    pub fn user(&self) -> &UserData {
        &self.user
    }

    /// Looks up a film by id
    ///
    /// An absent id is a valid, expected outcome, not an error.
    pub fn film_by_id(&self, id: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    /// Films matching a genre selector, in catalog order
    ///
    /// `"All"` returns the full list unfiltered; a known genre returns
    /// exact matches; anything else yields an empty list rather than an
    /// error.
    pub fn films_by_genre(&self, selector: &str) -> Vec<&Film> {
        if selector == ALL_GENRES_SELECTOR {
            return self.films.iter().collect();
        }
        match selector.parse::<Genre>() {
            Ok(genre) => self.films.iter().filter(|f| f.genre == genre).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Resolves film ids in input order, silently skipping any that do not
    /// resolve
    ///
    /// The output may be shorter than the input; dangling references are
    /// filtered here rather than surfaced to callers.
    pub fn films_by_ids<I, S>(&self, ids: I) -> Vec<&Film>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| self.film_by_id(id.as_ref()))
            .collect()
    }

    /// Up to `count` films sharing the given film's genre, excluding the
    /// film itself, in catalog order
    ///
    /// Similarity is genre equality only. Returns fewer than `count` when
    /// there are not enough candidates; never pads.
    pub fn similar_films(&self, film: &Film, count: usize) -> Vec<&Film> {
        self.films
            .iter()
            .filter(|f| f.id != film.id && f.genre == film.genre)
            .take(count)
            .collect()
    }

    /// Films referenced by a collection, in the collection's order
    pub fn collection_films(&self, collection: &Collection) -> Vec<&Film> {
        self.films_by_ids(&collection.film_ids)
    }

    /// Looks up a collection by id
    pub fn collection_by_id(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Looks up a mood taxonomy entry by id
    pub fn mood_by_id(&self, id: &str) -> Option<&MoodOption> {
        self.moods.iter().find(|m| m.id == id)
    }

    /// Films whose genre matches the given mood, in catalog order
    pub fn films_for_mood(&self, mood: &MoodOption) -> Vec<&Film> {
        self.films.iter().filter(|f| mood.matches(f.genre)).collect()
    }

    /// The featured film (first in catalog order)
    pub fn featured(&self) -> Option<&Film> {
        self.films.first()
    }

    /// The first `count` films in catalog order
    pub fn trending(&self, count: usize) -> Vec<&Film> {
        self.films.iter().take(count).collect()
    }
}
