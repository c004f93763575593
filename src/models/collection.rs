use serde::{Deserialize, Serialize};

/// A named, curated, ordered grouping of film references
///
/// `film_ids` is a non-owning reference relation; an id that does not
/// resolve against the catalog is silently skipped at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Unique identifier for the collection
    pub id: String,
    /// Display name of the collection
    pub name: String,
    /// Editorial description
    pub description: String,
    /// Ordered film id references
    pub film_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_serde_round_trip() {
        let collection = Collection {
            id: "col-9".to_string(),
            name: "Test Collection".to_string(),
            description: "Just for tests".to_string(),
            film_ids: vec!["1".to_string(), "2".to_string()],
        };

        let json = serde_json::to_string(&collection).unwrap();
        let deserialized: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, collection);
    }
}
