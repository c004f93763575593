use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Represents a single film in the catalog
///
/// Films are defined once at startup and never mutated, created, or
/// destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Film {
    /// Unique identifier for the film
    pub id: String,
    /// Title of the film
    pub title: String,
    /// Release year
    pub year: u16,
    /// Catalog rating on a 0.0-5.0 scale
    pub rating: f64,
    /// Genre classification
    pub genre: Genre,
    /// Director's name
    pub director: String,
    /// Ordered cast list
    pub cast: Vec<String>,
    /// Runtime in minutes
    pub runtime: u32,
    /// AI-generated editorial summary
    pub ai_summary: String,
    /// Ordered free-form mood tags used for thematic filtering
    pub mood_tags: Vec<String>,
    /// Opaque display string for the poster artwork; irrelevant to queries
    pub poster_gradient: String,
}

impl Film {
    /// The film's first mood tag, when it has one
    pub fn primary_mood_tag(&self) -> Option<&str> {
        self.mood_tags.first().map(String::as_str)
    }
}

/// Genre classification
///
/// Exactly eight values; serialized with their display spellings
/// (e.g. `"Sci-Fi"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Drama,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Comedy,
    Thriller,
    Horror,
    Romance,
    Animation,
}

/// Badge style for the "All" filter option and any genre missing a
/// dedicated entry.
pub const DEFAULT_BADGE_STYLE: &str = "bg-white/10 text-white border-white/20";

impl Genre {
    /// All eight genres in catalog display order
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Drama,
        Genre::SciFi,
        Genre::Comedy,
        Genre::Thriller,
        Genre::Horror,
        Genre::Romance,
        Genre::Animation,
    ];

    /// Display spelling of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::SciFi => "Sci-Fi",
            Genre::Comedy => "Comedy",
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Animation => "Animation",
        }
    }

    /// Badge style classes for this genre's filter pill
    pub fn badge_style(&self) -> &'static str {
        match self {
            Genre::Action => "bg-red-500/20 text-red-400 border-red-500/30",
            Genre::Drama => "bg-amber-500/20 text-amber-400 border-amber-500/30",
            Genre::SciFi => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            Genre::Comedy => "bg-yellow-500/20 text-yellow-400 border-yellow-500/30",
            Genre::Thriller => "bg-slate-500/20 text-slate-300 border-slate-500/30",
            Genre::Horror => "bg-emerald-500/20 text-emerald-400 border-emerald-500/30",
            Genre::Romance => "bg-pink-500/20 text-pink-400 border-pink-500/30",
            Genre::Animation => "bg-violet-500/20 text-violet-400 border-violet-500/30",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized genre string
#[derive(Debug, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct ParseGenreError(String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Genre::Action),
            "Drama" => Ok(Genre::Drama),
            "Sci-Fi" => Ok(Genre::SciFi),
            "Comedy" => Ok(Genre::Comedy),
            "Thriller" => Ok(Genre::Thriller),
            "Horror" => Ok(Genre::Horror),
            "Romance" => Ok(Genre::Romance),
            "Animation" => Ok(Genre::Animation),
            other => Err(ParseGenreError(other.to_string())),
        }
    }
}
