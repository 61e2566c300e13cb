use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use models::payment_information;
use serde_json::Value;
use service::payment_information::domain::PaymentInformationTree;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/payment-information", get(list).post(create))
        .route("/api/payment-information/:id", get(get_one).put(update).delete(destroy))
}

#[utoipa::path(
    get, path = "/api/payment-information", tag = "payment",
    responses(
        (status = 200, description = "Payment information rows, without relations"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<payment_information::Model>>, JsonApiError> {
    let rows = state.payment_information.find_all().await?;
    info!(count = rows.len(), "list payment information");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/api/payment-information", tag = "payment",
    request_body = crate::openapi::PaymentInformationInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PaymentInformationTree>), JsonApiError> {
    let tree = state.payment_information.create(&body).await?;
    Ok((StatusCode::CREATED, Json(tree)))
}

#[utoipa::path(
    get, path = "/api/payment-information/{id}", tag = "payment",
    params(("id" = i32, Path, description = "Payment information id")),
    responses(
        (status = 200, description = "Payment information with all relations"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentInformationTree>, JsonApiError> {
    Ok(Json(state.payment_information.find_one(id).await?))
}

#[utoipa::path(
    put, path = "/api/payment-information/{id}", tag = "payment",
    params(("id" = i32, Path, description = "Payment information id")),
    request_body = crate::openapi::PaymentInformationInputDoc,
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
) -> Result<Json<PaymentInformationTree>, JsonApiError> {
    Ok(Json(state.payment_information.update(id, &body).await?))
}

#[utoipa::path(
    delete, path = "/api/payment-information/{id}", tag = "payment",
    params(("id" = i32, Path, description = "Payment information id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn destroy(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.payment_information.destroy(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
