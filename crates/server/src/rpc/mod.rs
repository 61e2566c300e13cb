//! JSON-RPC style command layer.
//!
//! A request names a command and passes positional params; the registry
//! finds the command, runs it against the services and wraps the outcome
//! in a `result` or an `error {code, message, data}`.

pub mod commands;
pub mod params;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use models::errors::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, warn};

pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
pub const NOT_FOUND: i32 = -32004;

#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

impl RpcResponse {
    pub fn ok(id: Value, result: Value) -> Self {
        Self { jsonrpc: "2.0", result: Some(result), error: None, id }
    }

    pub fn err(id: Value, error: RpcError) -> Self {
        Self { jsonrpc: "2.0", result: None, error: Some(error), id }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message} ({code})")]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl From<ServiceError> for RpcError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => RpcError::invalid_params(v.message.clone())
                .with_data(serde_json::to_value(&v.details).unwrap_or(Value::Null)),
            ServiceError::Model(ModelError::Validation(msg)) => RpcError::invalid_params(msg),
            ServiceError::NotFound { entity, lookup } => {
                let message = format!("{entity} not found: {lookup}");
                RpcError::new(NOT_FOUND, message).with_data(serde_json::to_value(&lookup).unwrap_or(Value::Null))
            }
            e => {
                warn!(error = %e, "rpc command failed");
                RpcError::internal(e.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(e: serde_json::Error) -> Self {
        RpcError::internal(format!("failed to encode result: {e}"))
    }
}

/// One named command reachable through the dispatcher.
#[async_trait]
pub trait RpcCommand: Send + Sync {
    fn name(&self) -> &'static str;
    /// Parameter synopsis, e.g. `<categoryId|categoryKey>`.
    fn usage(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError>;

    fn help(&self) -> String {
        format!("{} {}\n    {}", self.name(), self.usage(), self.description())
    }
}

#[derive(Default, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn RpcCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, command: Arc<dyn RpcCommand>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn RpcCommand>> {
        self.commands.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub async fn dispatch(&self, request: RpcRequest) -> RpcResponse {
        let Some(command) = self.commands.get(request.method.as_str()) else {
            debug!(method = %request.method, "unknown rpc method");
            return RpcResponse::err(
                request.id,
                RpcError::new(METHOD_NOT_FOUND, format!("unknown method: {}", request.method)),
            );
        };
        debug!(method = %request.method, params = request.params.len(), "rpc dispatch");
        match command.execute(&request.params).await {
            Ok(result) => RpcResponse::ok(request.id, result),
            Err(e) => RpcResponse::err(request.id, e),
        }
    }

    /// Decode a raw body and dispatch it; malformed bodies get `-32600`.
    pub async fn handle(&self, body: Value) -> RpcResponse {
        let id = body.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<RpcRequest>(body) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => RpcResponse::err(id, RpcError::new(INVALID_REQUEST, format!("invalid request: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl RpcCommand for Echo {
        fn name(&self) -> &'static str { "echo" }
        fn usage(&self) -> &'static str { "[value...]" }
        fn description(&self) -> &'static str { "Return the params." }
        async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
            Ok(Value::Array(params.to_vec()))
        }
    }

    fn registry() -> CommandRegistry {
        let mut r = CommandRegistry::new();
        r.register(Arc::new(Echo));
        r
    }

    #[tokio::test]
    async fn dispatches_by_name() {
        let res = registry().handle(json!({"jsonrpc": "2.0", "method": "echo", "params": [1, "a"], "id": 7})).await;
        assert_eq!(res.result, Some(json!([1, "a"])));
        assert_eq!(res.id, json!(7));
        assert!(res.error.is_none());
    }

    #[tokio::test]
    async fn unknown_method_and_bad_body() {
        let res = registry().handle(json!({"method": "nope", "id": 1})).await;
        assert_eq!(res.error.unwrap().code, METHOD_NOT_FOUND);

        let res = registry().handle(json!({"params": [], "id": 2})).await;
        assert_eq!(res.error.unwrap().code, INVALID_REQUEST);
        assert_eq!(res.id, json!(2));
    }

    #[test]
    fn service_errors_map_to_codes() {
        let nf = RpcError::from(ServiceError::not_found("item_category", "cat_x"));
        assert_eq!(nf.code, NOT_FOUND);
        assert_eq!(nf.data, Some(json!({"kind": "ByKey", "value": "cat_x"})));

        let v = RpcError::from(ServiceError::from(service::validation::ValidationError::field("name", "is required")));
        assert_eq!(v.code, INVALID_PARAMS);
        assert_eq!(v.data.unwrap()[0]["field"], "name");
    }

    #[test]
    fn success_serializes_null_result() {
        let body = serde_json::to_value(RpcResponse::ok(json!(1), Value::Null)).unwrap();
        assert_eq!(body, json!({"jsonrpc": "2.0", "result": null, "id": 1}));
    }
}
