//! HTTP server for chowd

use crate::config::Config;
use crate::routes;
use crate::service::RestaurantService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub service: RestaurantService,
}

impl AppState {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }
}

/// All routes with tracing and permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::restaurant_routes())
        .merge(routes::location_routes())
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let service = RestaurantService::from_config(&config);
    let app = router(AppState::new(service));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
