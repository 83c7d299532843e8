//! DTOs de la API de cars
//!
//! Requests con validación de frontera (el core acepta los valores tal cual
//! llegan; rechazar litros negativos o marcas vacías es responsabilidad
//! exclusiva de esta capa).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Car, FuelEntry, FuelStats};

// Request para crear un car
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "brand no puede estar vacío"))]
    pub brand: String,

    #[validate(length(min = 1, message = "model no puede estar vacío"))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
}

// Request para registrar un repostaje
#[derive(Debug, Deserialize, Validate)]
pub struct AddFuelEntryRequest {
    #[validate(range(min = 0.0))]
    pub liters: f64,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub odometer: i32,
}

// Response de car con su historial
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub fuel_entries: Vec<FuelEntry>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            year: car.year,
            fuel_entries: car.fuel_entries,
        }
    }
}

// Response de estadísticas de combustible
#[derive(Debug, Serialize)]
pub struct FuelStatsResponse {
    pub total_fuel: f64,
    pub total_cost: f64,
    pub avg_consumption: f64,
}

impl From<FuelStats> for FuelStatsResponse {
    fn from(stats: FuelStats) -> Self {
        Self {
            total_fuel: stats.total_fuel,
            total_cost: stats.total_cost,
            avg_consumption: stats.avg_consumption,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
