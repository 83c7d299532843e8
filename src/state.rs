//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay singletons: el repositorio se crea
//! una vez acá y viaja inyectado a todos los handlers.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::CarRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<CarRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            repository: Arc::new(CarRepository::new()),
            config,
        }
    }
}
