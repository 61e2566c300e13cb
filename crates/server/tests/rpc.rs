use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use configs::{AppConfig, DatabaseConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> anyhow::Result<Router> {
    let cfg = AppConfig { database: DatabaseConfig::with_url("sqlite::memory:"), ..Default::default() };
    server::startup::build_app(&cfg).await
}

async fn rpc(app: &Router, method: &str, params: Value) -> anyhow::Result<Value> {
    let body = json!({"jsonrpc": "2.0", "method": method, "params": params, "id": 1});
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/rpc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn getcategory_by_id_and_by_key() -> anyhow::Result<()> {
    let app = app().await?;
    let root = rpc(&app, "addcategory", json!(["ROOT", "root item category", null, "cat_ROOT"])).await?;
    let root_id = root["result"]["id"].clone();
    let child = rpc(&app, "addcategory", json!(["Audio", null, "cat_ROOT"])).await?;
    assert_eq!(child["result"]["parentItemCategoryId"], root_id);

    let by_id = rpc(&app, "getcategory", json!([root_id])).await?;
    let by_key = rpc(&app, "getcategory", json!(["cat_ROOT"])).await?;
    assert_eq!(by_id["result"], by_key["result"]);
    assert_eq!(by_id["result"]["ChildItemCategories"][0]["name"], "Audio");

    let roots = rpc(&app, "getcategories", json!([])).await?;
    assert_eq!(roots["result"]["key"], "cat_ROOT");
    Ok(())
}

#[tokio::test]
async fn updatecategory_keeps_key() -> anyhow::Result<()> {
    let app = app().await?;
    let created = rpc(&app, "addcategory", json!(["Audio", null, null, "cat_audio"])).await?;
    let id = created["result"]["id"].clone();
    let updated = rpc(&app, "updatecategory", json!([id, "Hi-Fi", "better audio"])).await?;
    assert_eq!(updated["result"]["name"], "Hi-Fi");
    assert_eq!(updated["result"]["key"], "cat_audio");
    assert_eq!(updated["result"]["description"], "better audio");

    let removed = rpc(&app, "removecategory", json!([id])).await?;
    assert!(removed["result"].is_null());
    assert!(removed.get("error").is_none());
    Ok(())
}

#[tokio::test]
async fn payment_information_commands() -> anyhow::Result<()> {
    let app = app().await?;
    let body = json!({
        "type": "SALE",
        "escrow": {"type": "MAD", "ratio": {"buyer": 100, "seller": 100}},
        "itemPrice": [{"currency": "BITCOIN", "basePrice": 0.0001}],
        "listing_item_template_id": 0
    });
    let created = rpc(&app, "createpaymentinformation", json!([body])).await?;
    let id = created["result"]["id"].clone();
    assert_eq!(created["result"]["Escrow"]["type"], "MAD");

    let fetched = rpc(&app, "getpaymentinformation", json!([id])).await?;
    assert_eq!(fetched["result"], created["result"]);

    let update = json!({"type": "FREE", "listing_item_template_id": 0});
    let updated = rpc(&app, "updatepaymentinformation", json!([id, update])).await?;
    assert_eq!(updated["result"]["type"], "FREE");
    assert!(updated["result"]["Escrow"].is_null());
    assert_eq!(updated["result"]["ItemPrice"], json!([]));

    rpc(&app, "removepaymentinformation", json!([id])).await?;
    let missing = rpc(&app, "getpaymentinformation", json!([id])).await?;
    assert_eq!(missing["error"]["code"], -32004);
    assert_eq!(missing["error"]["data"]["kind"], "ById");
    Ok(())
}

#[tokio::test]
async fn error_codes() -> anyhow::Result<()> {
    let app = app().await?;

    let unknown = rpc(&app, "nosuchcommand", json!([])).await?;
    assert_eq!(unknown["error"]["code"], -32601);

    let bad_params = rpc(&app, "getcategory", json!([{"id": 1}])).await?;
    assert_eq!(bad_params["error"]["code"], -32602);

    let invalid = rpc(&app, "createpaymentinformation", json!([{}])).await?;
    assert_eq!(invalid["error"]["code"], -32602);
    assert_eq!(invalid["error"]["message"], "Request body is not valid");
    assert!(invalid["error"]["data"].as_array().is_some_and(|d| !d.is_empty()));

    let help = rpc(&app, "help", json!(["getcategory"])).await?;
    assert!(help["result"].as_str().is_some_and(|t| t.starts_with("getcategory")));
    Ok(())
}
