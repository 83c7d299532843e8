//! Controller de cars - punto de entrada único para las capas de frontera
//!
//! Compone el repositorio y el cálculo de estadísticas. Tanto el router REST
//! como el endpoint legacy pasan por acá; ninguno duplica lógica de dominio.

use std::sync::Arc;

use validator::Validate;

use crate::dto::car_dto::{
    AddFuelEntryRequest, ApiResponse, CarResponse, CreateCarRequest, FuelStatsResponse,
};
use crate::repositories::CarRepository;
use crate::services::compute_fuel_stats;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct CarController {
    repository: Arc<CarRepository>,
}

impl CarController {
    pub fn new(repository: Arc<CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<ApiResponse<CarResponse>> {
        // Validar campos en la frontera; el repositorio acepta lo que llega
        request.validate()?;

        let car = self
            .repository
            .create(request.brand, request.model, request.year)
            .await;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Car creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Vec<CarResponse> {
        self.repository
            .list_all()
            .await
            .into_iter()
            .map(CarResponse::from)
            .collect()
    }

    pub async fn add_fuel_entry(
        &self,
        car_id: i64,
        request: AddFuelEntryRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let added = self
            .repository
            .add_fuel_entry(car_id, request.liters, request.price, request.odometer)
            .await;

        if added {
            Ok(())
        } else {
            Err(not_found_error("Car", car_id))
        }
    }

    /// Estadísticas de un car. Un car desconocido y un car sin repostajes
    /// producen el mismo resultado ausente; esta interfaz no los distingue.
    pub async fn get_fuel_stats(&self, car_id: i64) -> AppResult<FuelStatsResponse> {
        let stats = self
            .repository
            .find_by_id(car_id)
            .await
            .and_then(|car| compute_fuel_stats(&car.fuel_entries));

        match stats {
            Some(stats) => Ok(stats.into()),
            None => Err(AppError::NotFound(
                "Car not found or no fuel data".to_string(),
            )),
        }
    }
}
