use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Film;

/// Floor and ceiling of the match-score band
///
/// The clamp keeps every displayed score inside a plausible range; the
/// runtime term only perturbs the last digit.
const MATCH_SCORE_MIN: u32 = 82;
const MATCH_SCORE_MAX: u32 = 97;

/// Mood tag used when a film carries none
const FALLBACK_MOOD_TAG: &str = "cinematic";

/// How many rated films seed the "because you watched" groups
const WATCHED_SOURCES: usize = 2;

/// Same-genre picks per watched film
const PICKS_PER_SOURCE: usize = 4;

/// Deterministic pseudo-score for a recommendation
///
/// `clamp(round(rating * 20 + runtime % 10), 82, 97)`. Not a learned
/// prediction; identical inputs always produce identical scores.
pub fn match_score(film: &Film) -> u32 {
    let raw = (film.rating * 20.0 + (film.runtime % 10) as f64).round() as u32;
    raw.clamp(MATCH_SCORE_MIN, MATCH_SCORE_MAX)
}

/// A single recommended film with its presentation metadata
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub film: Film,
    pub match_score: u32,
    pub primary_mood_tag: String,
    pub reasoning: String,
}

impl From<&Film> for Recommendation {
    fn from(film: &Film) -> Self {
        let tag = film
            .primary_mood_tag()
            .unwrap_or(FALLBACK_MOOD_TAG)
            .to_string();
        Self {
            match_score: match_score(film),
            reasoning: format!(
                "Strong match for {} fans who enjoy {} stories",
                film.genre.as_str().to_lowercase(),
                tag
            ),
            primary_mood_tag: tag,
            film: film.clone(),
        }
    }
}

/// Recommendations grouped under one previously watched film
#[derive(Debug, Clone, Serialize)]
pub struct WatchedGroup {
    pub watched: Film,
    pub picks: Vec<Recommendation>,
}

/// Builds the "because you watched" showcase
///
/// Takes the user's first rated films (skipping any whose id no longer
/// resolves) and recommends up to four same-genre films for each.
pub fn because_you_watched(catalog: &Catalog) -> Vec<WatchedGroup> {
    catalog
        .user()
        .ratings
        .iter()
        .filter_map(|r| catalog.film_by_id(&r.film_id))
        .take(WATCHED_SOURCES)
        .map(|watched| WatchedGroup {
            watched: watched.clone(),
            picks: catalog
                .similar_films(watched, PICKS_PER_SOURCE)
                .into_iter()
                .map(Recommendation::from)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn film_with(rating: f64, runtime: u32) -> Film {
        Film {
            id: "x".to_string(),
            title: "X".to_string(),
            year: 2024,
            rating,
            genre: Genre::SciFi,
            director: "D".to_string(),
            cast: vec![],
            runtime,
            ai_summary: String::new(),
            mood_tags: vec!["mind-bending".to_string()],
            poster_gradient: String::new(),
        }
    }

    #[test]
    fn test_match_score_clamps_high() {
        // 4.7 * 20 + 148 % 10 = 94 + 8 = 102, clamped to 97
        assert_eq!(match_score(&film_with(4.7, 148)), 97);
    }

    #[test]
    fn test_match_score_within_band() {
        // 4.0 * 20 + 104 % 10 = 80 + 4 = 84
        assert_eq!(match_score(&film_with(4.0, 104)), 84);
        // 3.8 * 20 + 108 % 10 = 76 + 8 = 84
        assert_eq!(match_score(&film_with(3.8, 108)), 84);
    }

    #[test]
    fn test_match_score_clamps_low() {
        // 1.0 * 20 + 0 = 20, clamped to 82
        assert_eq!(match_score(&film_with(1.0, 100)), 82);
    }

    #[test]
    fn test_recommendation_uses_primary_mood_tag() {
        let rec = Recommendation::from(&film_with(4.0, 104));
        assert_eq!(rec.primary_mood_tag, "mind-bending");
        assert_eq!(
            rec.reasoning,
            "Strong match for sci-fi fans who enjoy mind-bending stories"
        );
    }

    #[test]
    fn test_recommendation_fallback_mood_tag() {
        let mut film = film_with(4.0, 104);
        film.mood_tags.clear();
        let rec = Recommendation::from(&film);
        assert_eq!(rec.primary_mood_tag, "cinematic");
    }

    #[test]
    fn test_because_you_watched_seeded() {
        let catalog = Catalog::seeded();
        let groups = because_you_watched(&catalog);

        // First two rated films: "The Last Meridian" (Drama) and
        // "Sunlit Detour" (Comedy)
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].watched.title, "The Last Meridian");
        assert_eq!(groups[1].watched.title, "Sunlit Detour");

        for group in &groups {
            assert!(group.picks.len() <= 4);
            for pick in &group.picks {
                assert_eq!(pick.film.genre, group.watched.genre);
                assert_ne!(pick.film.id, group.watched.id);
                assert!((82..=97).contains(&pick.match_score));
            }
        }

        // Only one other Drama film exists in the catalog
        assert_eq!(groups[0].picks.len(), 1);
        assert_eq!(groups[0].picks[0].film.title, "Bitter Honey");
        assert_eq!(groups[0].picks[0].match_score, 94);
    }
}
