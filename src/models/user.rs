use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Genre;

/// A user's numeric evaluation of a single film
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRating {
    /// The rated film's id
    pub film_id: String,
    /// Rating on a 1-5 star scale
    pub rating: f64,
    /// Date the rating was recorded
    pub date_rated: NaiveDate,
}

/// One month of viewing activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyActivity {
    /// Abbreviated month label (e.g. "Aug")
    pub month: String,
    /// Films watched that month
    pub count: u32,
}

/// Precomputed aggregate viewing statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    pub total_hours_watched: u32,
    pub films_watched_this_month: u32,
    pub average_rating: f64,
    pub favorite_genre: Genre,
    pub total_films_watched: u32,
    pub monthly_activity: Vec<MonthlyActivity>,
}

/// The single simulated user's library data
///
/// Read-only for the process lifetime; ratings entered through a UI are
/// ephemeral view state and are never merged back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    /// Ordered film ids marked for later viewing
    pub watchlist: Vec<String>,
    /// Ratings the user has recorded, in rating order
    pub ratings: Vec<UserRating>,
    /// Precomputed aggregate stats
    pub stats: UserStats,
}

impl UserData {
    /// The user's rating for a film, when one exists
    pub fn rating_for(&self, film_id: &str) -> Option<&UserRating> {
        self.ratings.iter().find(|r| r.film_id == film_id)
    }

    /// Ids of every rated film, in rating order
    pub fn rated_film_ids(&self) -> Vec<&str> {
        self.ratings.iter().map(|r| r.film_id.as_str()).collect()
    }

    /// Watchlist ids followed by rated ids, deduplicated by first occurrence
    pub fn combined_film_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for id in self
            .watchlist
            .iter()
            .map(String::as_str)
            .chain(self.ratings.iter().map(|r| r.film_id.as_str()))
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}
