//! Endpoint legacy de estadísticas (mantener por compatibilidad)
//!
//! Segunda puerta de entrada a la misma operación de estadísticas, con el
//! contrato viejo: query param `car_id` parseado a mano y status codes
//! seteados manualmente. Usa el mismo controller que la ruta REST.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::controllers::car_controller::CarController;
use crate::state::AppState;

pub fn create_legacy_stats_router() -> Router<AppState> {
    Router::new().route("/fuel-stats", get(legacy_fuel_stats))
}

async fn legacy_fuel_stats(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    // Parseo manual del parámetro, como el contrato original
    let car_id_param = match params.get("car_id") {
        Some(value) if !value.is_empty() => value,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "car_id parameter is required" })),
            );
        }
    };

    let car_id: i64 = match car_id_param.parse() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid car_id format" })),
            );
        }
    };

    let controller = CarController::new(state.repository.clone());
    match controller.get_fuel_stats(car_id).await {
        Ok(stats) => (StatusCode::OK, Json(json!(stats))),
        // Car desconocido o sin repostajes: mismo 404 para ambos casos
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Car not found or no fuel data" })),
        ),
    }
}
