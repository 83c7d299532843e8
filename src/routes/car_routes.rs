//! Rutas REST de cars
//!
//! Esta capa solo traduce HTTP <-> dominio: extrae valores tipados del
//! request y mapea los resultados del controller a status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{
    AddFuelEntryRequest, ApiResponse, CarResponse, CreateCarRequest, FuelStatsResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
        .route("/:id/fuel", post(add_fuel_entry))
        .route("/:id/fuel/stats", get(get_fuel_stats))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CarResponse>>), AppError> {
    let controller = CarController::new(state.repository.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_cars(State(state): State<AppState>) -> Json<Vec<CarResponse>> {
    let controller = CarController::new(state.repository.clone());
    Json(controller.list().await)
}

async fn add_fuel_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<AddFuelEntryRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.repository.clone());
    controller.add_fuel_entry(id, request).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Repostaje registrado exitosamente"
    })))
}

async fn get_fuel_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FuelStatsResponse>, AppError> {
    let controller = CarController::new(state.repository.clone());
    let stats = controller.get_fuel_stats(id).await?;
    Ok(Json(stats))
}
