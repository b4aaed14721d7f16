//! HTTP API tests against an in-process router with stub sources

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chow_common::{normalize, RawRestaurant, Restaurant};
use chowd::sources::{SourceError, SourceProvider};
use chowd::{router, AppState, RestaurantService};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct StubSource {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SourceProvider for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut raws: Vec<RawRestaurant> = (1..=7)
            .map(|i| RawRestaurant::new(format!("Ikeja Spot {}", i)).with_location("Allen Avenue, Ikeja"))
            .collect();
        raws.push(RawRestaurant::new("Yellow Chilli").with_location("Victoria Island, Lagos"));
        raws.push(RawRestaurant::new("Nkoyo").with_location("Wuse 2, Abuja"));
        raws.push(RawRestaurant::new("Jevinik").with_location("Garki, Abuja"));
        Ok(raws.into_iter().map(|r| normalize(r).unwrap()).collect())
    }
}

struct DownSource;

#[async_trait]
impl SourceProvider for DownSource {
    fn name(&self) -> &str {
        "down"
    }

    async fn fetch(&self) -> Result<Vec<Restaurant>, SourceError> {
        Err(SourceError::AllPagesFailed(3))
    }
}

fn app() -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(StubSource { calls: Arc::clone(&calls) }),
        Box::new(DownSource),
    ];
    let service = RestaurantService::new(providers, Duration::from_secs(3600));
    (router(AppState::new(service)), calls)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "chowdeck-api");
}

#[tokio::test]
async fn test_city_filter_with_limit() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/api/restaurants?city=Lagos&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert!(data.iter().all(|r| r["city"] == "Lagos"));
}

#[tokio::test]
async fn test_list_without_limit() {
    let (app, _) = app();
    let (_, body) = get_json(&app, "/api/restaurants").await;
    assert_eq!(body["count"], 10);

    let (_, body) = get_json(&app, "/api/restaurants?city=abuja&limit=0").await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_get_by_id() {
    let (app, _) = app();
    let id = chow_common::restaurant_id("Nkoyo", "Abuja");
    let (status, body) = get_json(&app, &format!("/api/restaurants/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Nkoyo");
    assert_eq!(body["data"]["lga"], "Abuja Municipal");
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/api/restaurants/no_such_place_deadbeef").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_refresh_recomputes() {
    let (app, calls) = app();
    get_json(&app, "/api/restaurants").await;
    get_json(&app, "/api/restaurants").await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let (status, _, body) = send(&app, Method::POST, "/api/restaurants/refresh").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 10);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let (_, body) = get_json(&app, "/api/restaurants").await;
    assert_eq!(body["count"], 10);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_sources_report_failure() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/api/restaurants/sources").await;
    assert_eq!(status, StatusCode::OK);

    let sources = body["data"]["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0]["status"], "loaded");
    assert_eq!(sources[1]["source"], "down");
    assert_eq!(sources[1]["status"], "failed");
    assert_eq!(body["data"]["total"], 10);
}

#[tokio::test]
async fn test_states_and_lgas() {
    let (app, _) = app();
    let (_, body) = get_json(&app, "/api/locations/states").await;
    let states = body["data"].as_array().unwrap();
    assert_eq!(states[0], "Lagos");
    assert!(states.contains(&Value::from("FCT")));

    let (status, body) = get_json(&app, "/api/locations/lgas/lagos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "Lagos");
    assert!(body["data"].as_array().unwrap().contains(&Value::from("Eti-Osa")));

    let (status, body) = get_json(&app, "/api/locations/lgas/Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_location_pagination() {
    let (app, _) = app();
    let (status, body) =
        get_json(&app, "/api/restaurants/location?state=Lagos&lga=ikeja&page=2&per_page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "Lagos");
    assert_eq!(body["lga"], "Ikeja");
    assert_eq!(body["total"], 7);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["name"], "Ikeja Spot 4");

    let (_, body) = get_json(&app, "/api/restaurants/location?state=Lagos&page=9").await;
    assert_eq!(body["total"], 8);
    assert_eq!(body["per_page"], 15);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_location_requires_state() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/api/restaurants/location?lga=Ikeja").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = get_json(&app, "/api/restaurants/location?state=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_excel_download() {
    let (app, _) = app();
    let (status, headers, body) =
        send(&app, Method::GET, "/api/restaurants/download/excel?lga=Eti-Osa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("Lagos_Eti-Osa_Restaurants_"));
    assert!(disposition.contains(".xlsx"));
    assert!(body.starts_with(b"PK"));
}

#[tokio::test]
async fn test_unparseable_numbers_use_defaults() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/api/restaurants?limit=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 10);

    let (status, body) =
        get_json(&app, "/api/restaurants/location?state=Lagos&page=abc&per_page=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 15);
    assert_eq!(body["count"], 8);
}

#[tokio::test]
async fn test_excel_filename_is_sanitized() {
    let (app, _) = app();
    let (status, headers, body) =
        send(&app, Method::GET, "/api/restaurants/download/excel?lga=a%0Ab").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(b"PK"));
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("Lagos_a_b_Restaurants_"));

    let (status, headers, _) = send(
        &app,
        Method::GET,
        "/api/restaurants/download/excel?lga=x%22%3B%20filename%3Devil.exe",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert_eq!(disposition.matches('"').count(), 2);
    assert!(!disposition.contains("; filename=evil"));
}
