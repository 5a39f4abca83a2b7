//! Advert routes: the collection at `/api/adverts` and single items at `/api/advert/:id`.

use crate::handlers::advert::{create, delete as delete_handler, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn advert_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/adverts", get(list).post(create))
        .route("/api/advert/:id", get(read).delete(delete_handler))
        .with_state(state)
}
