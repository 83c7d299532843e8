//! Backend de tracking de combustible
//!
//! Cars con su historial de repostajes en memoria, más estadísticas
//! derivadas bajo demanda. El router se construye acá para que los tests
//! de integración ejerciten exactamente la misma app que el binario.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/cars", routes::car_routes::create_car_router())
        // Ruta legacy (mantener por compatibilidad con el cliente viejo)
        .nest(
            "/legacy",
            routes::legacy_stats_routes::create_legacy_stats_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "carfuel-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
