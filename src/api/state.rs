use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state
///
/// The catalog never mutates after startup, so a plain `Arc` is enough;
/// handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates application state around an explicit catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Application state backed by the built-in dataset
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }
}
