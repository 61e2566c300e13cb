use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use crate::rpc::RpcResponse;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/rpc", post(call))
}

/// Errors travel inside the response body, so the status is always 200.
#[utoipa::path(
    post, path = "/api/rpc", tag = "rpc",
    request_body = crate::openapi::RpcRequestDoc,
    responses((status = 200, description = "JSON-RPC response with result or error"))
)]
pub async fn call(State(state): State<ServerState>, Json(body): Json<Value>) -> Json<RpcResponse> {
    Json(state.rpc.handle(body).await)
}
