mod common;

use advert_board::extractors::ExistingAdvert;
use advert_board::handlers::advert::delete;
use advert_board::{AppError, AppState, NewAdvert};
use axum::extract::State;
use common::memory_store;

#[tokio::test]
async fn delete_of_a_row_removed_after_lookup_is_not_found() {
    let store = memory_store().await;
    let state = AppState::new(store.clone());
    let advert = store
        .insert(&NewAdvert {
            title: "Sale".into(),
            description: "Old bike".into(),
            owner: "alice".into(),
        })
        .await
        .unwrap();
    assert!(store.delete(advert.id).await.unwrap());

    let result = delete(State(state), ExistingAdvert(advert)).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_of_a_live_row_returns_an_empty_object() {
    let store = memory_store().await;
    let advert = store
        .insert(&NewAdvert {
            title: "Lamp".into(),
            description: "Desk lamp".into(),
            owner: "bob".into(),
        })
        .await
        .unwrap();
    let id = advert.id;

    let axum::Json(body) = delete(State(AppState::new(store.clone())), ExistingAdvert(advert))
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({}));
    assert_eq!(store.get_by_id(id).await.unwrap(), None);
}
