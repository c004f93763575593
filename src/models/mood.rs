use serde::{Deserialize, Serialize};

use super::Genre;

/// A static taxonomy entry mapping a mood to the genres it matches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodOption {
    /// Unique identifier for the mood (e.g. "mind-bending")
    pub id: String,
    /// Display emoji
    pub emoji: String,
    /// Display label
    pub label: String,
    /// Genres this mood matches against
    pub genres: Vec<Genre>,
    /// Short description of the mood
    pub description: String,
}

impl MoodOption {
    /// Whether a film of the given genre fits this mood
    pub fn matches(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}
