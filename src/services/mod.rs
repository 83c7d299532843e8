//! Services module
//!
//! Lógica de negocio pura, separada del repositorio y de la capa HTTP.

pub mod fuel_stats_service;

pub use fuel_stats_service::compute_fuel_stats;
