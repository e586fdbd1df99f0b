//! Shared helpers for webserver integration tests

#![allow(dead_code)]

use std::sync::Arc;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use catalog::{CatalogService, InMemoryStorage, PromotionEngine};
use gateway::FixedPlaceholder;
use gateway::traits::MockRecipeGateway;
use shared::{Clock, FixedClock};
use webserver::WebServer;

pub const PLACEHOLDER_PRICE: u64 = 500;

pub fn monday() -> FixedClock {
    FixedClock::on_date(2024, 6, 3).unwrap()
}

pub fn wednesday() -> FixedClock {
    FixedClock::on_date(2024, 6, 5).unwrap()
}

pub fn saturday() -> FixedClock {
    FixedClock::on_date(2024, 6, 8).unwrap()
}

/// Router over in-memory storage, the given gateway mock and a frozen clock
pub async fn test_app(gateway: MockRecipeGateway, clock: FixedClock) -> (Router, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let clock: Arc<dyn Clock> = Arc::new(clock);
    let catalog = CatalogService::open(storage.clone(), clock.clone()).await.unwrap();

    let server = WebServer::new(
        "127.0.0.1:0".parse().unwrap(),
        catalog,
        gateway,
        PromotionEngine::default(),
        Arc::new(FixedPlaceholder(PLACEHOLDER_PRICE)),
        clock,
    );
    (server.build_router(), storage)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, body.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, body.to_string())).await
}

pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn dish(name: &str, price: u64) -> Value {
    serde_json::json!({
        "name": name,
        "price": price,
        "image": format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        "category": "Main",
        "complimentaryDrink": "Mango Lassi"
    })
}
