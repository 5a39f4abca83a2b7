//! Router assembly.

mod advert;
mod common;

pub use advert::advert_routes;
pub use common::common_routes;

use crate::config::AppConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common and advert routes behind request tracing and a body size cap.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(advert_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
        )
}
