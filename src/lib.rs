//! Advert board: REST backend for advert records over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, FieldErrors, NOT_FOUND_MESSAGE};
pub use routes::{advert_routes, app_router, common_routes};
pub use service::AdvertValidator;
pub use state::AppState;
pub use store::{connect_store, Advert, AdvertStore, NewAdvert};
