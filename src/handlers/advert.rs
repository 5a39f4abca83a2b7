//! Advert handlers: create and list on the collection, read and delete on an item.

use crate::error::AppError;
use crate::extractors::{ExistingAdvert, ValidAdvert};
use crate::state::AppState;
use crate::store::Advert;
use axum::{extract::State, Json};
use serde_json::{Map, Value};

pub async fn create(
    State(state): State<AppState>,
    ValidAdvert(new_advert): ValidAdvert,
) -> Result<Json<Advert>, AppError> {
    let advert = state.store.insert(&new_advert).await?;
    tracing::info!(id = advert.id, owner = %advert.owner, "advert created");
    Ok(Json(advert))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Advert>>, AppError> {
    let adverts = state.store.list_all().await?;
    Ok(Json(adverts))
}

pub async fn read(ExistingAdvert(advert): ExistingAdvert) -> Json<Advert> {
    Json(advert)
}

pub async fn delete(
    State(state): State<AppState>,
    ExistingAdvert(advert): ExistingAdvert,
) -> Result<Json<Value>, AppError> {
    // Another request may have removed it since the guard looked it up.
    if !state.store.delete(advert.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id = advert.id, "advert deleted");
    Ok(Json(Value::Object(Map::new())))
}
