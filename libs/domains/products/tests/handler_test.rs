//! Handler tests for Products domain
//!
//! These drive the products router with `oneshot()` against an in-memory
//! repository:
//! - Request deserialization and validation
//! - Response shape and status codes
//! - JSON error bodies
//! - Startup seeding as seen through the API

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::InMemoryProductRepository;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn post(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn seeded() -> InMemoryProductRepository {
    let repo = InMemoryProductRepository::new();
    let outcome = seed_products(&ProductService::new(repo.clone()))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SeedOutcome::Seeded {
            inserted: 6,
            skipped: 0
        }
    );
    repo
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let repo = InMemoryProductRepository::new();

    let (status, id) = post(
        app(repo.clone()),
        json!({ "title": "Lamp", "price": 10.5, "category": "home" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let id = id.as_str().expect("id is a JSON string").to_string();
    assert_eq!(id.len(), 24);

    let (status, product) = get(app(repo), &format!("/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        product,
        json!({
            "id": id,
            "title": "Lamp",
            "description": null,
            "price": 10.5,
            "category": "home",
            "in_stock": true
        })
    );
}

#[tokio::test]
async fn test_create_missing_price_is_400() {
    let repo = InMemoryProductRepository::new();

    let (status, body) = post(app(repo.clone()), json!({ "title": "Lamp", "category": "home" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("price"));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_create_negative_price_is_400() {
    let repo = InMemoryProductRepository::new();

    let (status, body) = post(
        app(repo.clone()),
        json!({ "title": "Lamp", "price": -1, "category": "home" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("price"));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_list_limit_out_of_range_is_400() {
    let repo = seeded().await;

    for uri in ["/?limit=0", "/?limit=101", "/featured?limit=0", "/featured?limit=25"] {
        let (status, body) = get(app(repo.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].as_str().unwrap().contains("limit"), "{uri}");
    }
}

#[tokio::test]
async fn test_list_limit_boundaries_are_accepted() {
    let repo = seeded().await;

    let (status, products) = get(app(repo.clone()), "/?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().unwrap().len(), 1);

    let (status, _) = get(app(repo), "/?limit=100").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_invalid_id_is_400() {
    let (status, body) = get(app(InMemoryProductRepository::new()), "/not-an-object-id").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid product id");
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let (status, body) = get(
        app(InMemoryProductRepository::new()),
        "/65f1c2d3e4a5b6c7d8e9f0a1",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn test_seeded_catalog_is_listed() {
    let repo = seeded().await;

    let (status, products) = get(app(repo), "/").await;

    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_value(products).unwrap();
    assert_eq!(products.len(), 6);
    assert!(products.iter().all(|p| p.in_stock));
}

#[tokio::test]
async fn test_category_filter() {
    let repo = seeded().await;

    let (status, products) = get(app(repo), "/?category=audio").await;

    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_value(products).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Aurora Pro Headphones");
    assert_eq!(products[0].price, 199.99);
}

#[tokio::test]
async fn test_featured_is_newest_in_stock_first() {
    let repo = seeded().await;
    let (_, id) = post(
        app(repo.clone()),
        json!({ "title": "Sold Out", "price": 5, "category": "misc", "in_stock": false }),
    )
    .await;
    assert!(id.is_string());

    let (status, products) = get(app(repo), "/featured?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_value(products).unwrap();
    let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Quanta Power Bank 20K", "Voyager Sling Bag"]);
}

#[tokio::test]
async fn test_second_seed_leaves_count_unchanged() {
    let repo = seeded().await;

    let outcome = seed_products(&ProductService::new(repo.clone()))
        .await
        .unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 6 });
    assert_eq!(repo.len(), 6);
}

#[tokio::test]
async fn test_disconnected_store_is_500() {
    let repo = InMemoryProductRepository::disconnected();

    for uri in ["/", "/featured", "/65f1c2d3e4a5b6c7d8e9f0a1", "/not-an-id"] {
        let (status, body) = get(app(repo.clone()), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["detail"], "Database not available", "{uri}");
    }

    let (status, body) = post(
        app(repo),
        json!({ "title": "Lamp", "price": 1, "category": "home" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Database not available");
}
