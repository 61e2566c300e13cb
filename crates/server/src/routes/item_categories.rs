use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use models::item_category;
use serde_json::Value;
use service::item_category::domain::ItemCategoryNode;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/item-categories", get(list).post(create))
        .route("/api/item-categories/root", get(root))
        .route("/api/item-categories/key/:key", get(by_key))
        .route("/api/item-categories/:id", get(get_one).put(update).delete(destroy))
}

#[utoipa::path(
    get, path = "/api/item-categories", tag = "category",
    responses((status = 200, description = "All categories, flat"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<item_category::Model>>, JsonApiError> {
    Ok(Json(state.item_categories.find_all().await?))
}

#[utoipa::path(
    post, path = "/api/item-categories", tag = "category",
    request_body = crate::openapi::ItemCategoryInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ItemCategoryNode>), JsonApiError> {
    let node = state.item_categories.create(&body).await?;
    Ok((StatusCode::CREATED, Json(node)))
}

#[utoipa::path(
    get, path = "/api/item-categories/root", tag = "category",
    responses(
        (status = 200, description = "Root category with its children"),
        (status = 404, description = "Catalogue is empty")
    )
)]
pub async fn root(State(state): State<ServerState>) -> Result<Json<ItemCategoryNode>, JsonApiError> {
    Ok(Json(state.item_categories.find_root().await?))
}

#[utoipa::path(
    get, path = "/api/item-categories/key/{key}", tag = "category",
    params(("key" = String, Path, description = "Category key")),
    responses(
        (status = 200, description = "Category with parent and children"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn by_key(State(state): State<ServerState>, Path(key): Path<String>) -> Result<Json<ItemCategoryNode>, JsonApiError> {
    Ok(Json(state.item_categories.find_one_by_key(&key).await?))
}

#[utoipa::path(
    get, path = "/api/item-categories/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category with parent and children"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ItemCategoryNode>, JsonApiError> {
    Ok(Json(state.item_categories.find_one(id).await?))
}

#[utoipa::path(
    put, path = "/api/item-categories/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = crate::openapi::ItemCategoryInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<ItemCategoryNode>, JsonApiError> {
    Ok(Json(state.item_categories.update(id, &body).await?))
}

#[utoipa::path(
    delete, path = "/api/item-categories/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Deleted with its children"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn destroy(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.item_categories.destroy(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
