//! Existence guard for `/api/advert/:id` and payload guard for advert creation.

use crate::error::AppError;
use crate::service::{AdvertValidator, SCHEMA_KEY};
use crate::state::AppState;
use crate::store::{Advert, NewAdvert};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

/// Advert resolved from the `:id` path segment. Rejects with 404 when the id is not
/// a non-negative integer or no advert has it.
#[derive(Clone, Debug)]
pub struct ExistingAdvert(pub Advert);

#[async_trait]
impl FromRequestParts<AppState> for ExistingAdvert {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        let id = parse_advert_id(&raw).ok_or(AppError::NotFound)?;
        let advert = state.store.get_by_id(id).await?.ok_or(AppError::NotFound)?;
        Ok(ExistingAdvert(advert))
    }
}

/// Only plain digits name an advert; signs, whitespace and overflow do not.
pub fn parse_advert_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Advert creation payload that passed validation.
#[derive(Clone, Debug)]
pub struct ValidAdvert(pub NewAdvert);

#[async_trait]
impl FromRequest<AppState> for ValidAdvert {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::field(SCHEMA_KEY, rejection.body_text()))?;
        let advert = AdvertValidator::validate(&body).map_err(AppError::Validation)?;
        Ok(ValidAdvert(advert))
    }
}
