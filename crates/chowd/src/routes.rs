//! API routes for chowd

use crate::error::ApiError;
use crate::export::{build_workbook, export_filename, XLSX_CONTENT_TYPE};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chow_common::locations::{all_states, canonical_state, lgas_for_state};
use chow_common::{MergeReport, Restaurant};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

pub const DEFAULT_PER_PAGE: usize = 15;
pub const DEFAULT_EXPORT_STATE: &str = "Lagos";

/// Numeric query value; anything unparseable counts as absent
fn lenient_usize(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse().ok())
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "chowdeck-api".to_string(),
    })
}

// ============================================================================
// Restaurant Routes
// ============================================================================

pub fn restaurant_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/restaurants", get(list_restaurants))
        .route("/api/restaurants/refresh", post(refresh_restaurants))
        .route("/api/restaurants/sources", get(source_report))
        .route("/api/restaurants/location", get(restaurants_by_location))
        .route("/api/restaurants/download/excel", get(download_excel))
        .route("/api/restaurants/:id", get(get_restaurant))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub city: Option<String>,
    /// Absent, zero or unparseable means no limit
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Restaurant>,
}

async fn list_restaurants(
    State(state): State<AppStateArc>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let catalog = state.service.all_restaurants().await;
    let limit = lenient_usize(query.limit.as_deref())
        .filter(|&n| n > 0)
        .unwrap_or(usize::MAX);

    let data: Vec<Restaurant> = match query.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => catalog.filter_city(city).take(limit).cloned().collect(),
        _ => catalog.iter().take(limit).cloned().collect(),
    };

    Json(ListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantResponse {
    pub success: bool,
    pub data: Restaurant,
}

async fn get_restaurant(
    State(state): State<AppStateArc>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .restaurant_by_id(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Restaurant not found".to_string()))?;

    Ok(Json(RestaurantResponse {
        success: true,
        data: restaurant,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
}

async fn refresh_restaurants(State(state): State<AppStateArc>) -> Json<RefreshResponse> {
    let catalog = state.service.refresh().await;
    info!("  Catalog refreshed: {} restaurants", catalog.len());

    Json(RefreshResponse {
        success: true,
        message: "Data refreshed successfully".to_string(),
        count: catalog.len(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub success: bool,
    pub data: MergeReport,
}

async fn source_report(State(state): State<AppStateArc>) -> Json<SourcesResponse> {
    Json(SourcesResponse {
        success: true,
        data: state.service.last_report().await,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub state: Option<String>,
    pub lga: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    pub success: bool,
    pub state: String,
    pub lga: Option<String>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
    pub count: usize,
    pub data: Vec<Restaurant>,
}

/// Known state name for `raw`, or 404
fn known_state(raw: &str) -> Result<&'static str, ApiError> {
    canonical_state(raw.trim())
        .ok_or_else(|| ApiError::NotFound(format!("State '{}' not found", raw.trim())))
}

/// The table spelling of `lga` when it belongs to `state`, else as given
fn known_lga(state: &str, lga: Option<&str>) -> Option<String> {
    let lga = lga.map(str::trim).filter(|l| !l.is_empty())?;
    let canonical = lgas_for_state(state)
        .unwrap_or_default()
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(lga));
    Some(canonical.unwrap_or(lga).to_string())
}

async fn restaurants_by_location(
    State(state): State<AppStateArc>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<LocationResponse>, ApiError> {
    let raw_state = query
        .state
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("State parameter is required".to_string()))?;
    let state_name = known_state(raw_state)?;
    let lga = known_lga(state_name, query.lga.as_deref());

    let matches = state
        .service
        .restaurants_for_location(state_name, lga.as_deref())
        .await;

    let page = lenient_usize(query.page.as_deref()).unwrap_or(1).max(1);
    let per_page = lenient_usize(query.per_page.as_deref())
        .unwrap_or(DEFAULT_PER_PAGE)
        .max(1);
    let total = matches.len();
    let pages = total.div_ceil(per_page);

    let data: Vec<Restaurant> = matches
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Ok(Json(LocationResponse {
        success: true,
        state: state_name.to_string(),
        lga,
        page,
        per_page,
        total,
        pages,
        count: data.len(),
        data,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub state: Option<String>,
    pub lga: Option<String>,
}

async fn download_excel(
    State(state): State<AppStateArc>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let raw_state = query
        .state
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_EXPORT_STATE);
    let state_name = known_state(raw_state)?;
    let lga = known_lga(state_name, query.lga.as_deref());

    let restaurants = state
        .service
        .restaurants_for_location(state_name, lga.as_deref())
        .await;

    let now = chrono::Local::now();
    let bytes = build_workbook(
        state_name,
        &restaurants,
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
    )?;
    let filename = export_filename(state_name, lga.as_deref(), now.date_naive());
    info!("  Exported {} restaurants to {}", restaurants.len(), filename);

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    ))
}

// ============================================================================
// Location Routes
// ============================================================================

pub fn location_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/locations/states", get(list_states))
        .route("/api/locations/lgas/:state", get(list_lgas))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<String>,
}

async fn list_states() -> Json<StatesResponse> {
    let data: Vec<String> = all_states().into_iter().map(str::to_string).collect();
    Json(StatesResponse {
        success: true,
        count: data.len(),
        data,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LgasResponse {
    pub success: bool,
    pub state: String,
    pub count: usize,
    pub data: Vec<String>,
}

async fn list_lgas(Path(raw_state): Path<String>) -> Result<Json<LgasResponse>, ApiError> {
    let state_name = known_state(&raw_state)?;
    let data: Vec<String> = lgas_for_state(state_name)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(LgasResponse {
        success: true,
        state: state_name.to_string(),
        count: data.len(),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lga_uses_table_spelling() {
        assert_eq!(known_lga("Lagos", Some("eti-osa")).as_deref(), Some("Eti-Osa"));
        assert_eq!(known_lga("Lagos", Some("Atlantis")).as_deref(), Some("Atlantis"));
        assert_eq!(known_lga("Lagos", Some("  ")), None);
        assert_eq!(known_lga("Lagos", None), None);
    }

    #[test]
    fn test_lenient_usize() {
        assert_eq!(lenient_usize(Some("5")), Some(5));
        assert_eq!(lenient_usize(Some(" 12 ")), Some(12));
        assert_eq!(lenient_usize(Some("abc")), None);
        assert_eq!(lenient_usize(Some("-3")), None);
        assert_eq!(lenient_usize(None), None);
    }

    #[test]
    fn test_known_state() {
        assert_eq!(known_state(" lagos ").unwrap(), "Lagos");
        assert!(matches!(known_state("Atlantis"), Err(ApiError::NotFound(_))));
    }
}
