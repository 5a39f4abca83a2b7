//! Shared application state for all routes.

use crate::store::AdvertStore;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and handed to every handler through `State`.
    pub store: AdvertStore,
}

impl AppState {
    pub fn new(store: AdvertStore) -> Self {
        Self { store }
    }
}
