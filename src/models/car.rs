//! Modelos de Car, FuelEntry y FuelStats
//!
//! Este módulo contiene los tipos de dominio del tracker de combustible.
//! El repositorio es el único dueño de los Car; hacia afuera solo viajan clones.

use serde::{Deserialize, Serialize};

/// Car principal - identidad + historial de repostajes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub fuel_entries: Vec<FuelEntry>,
}

impl Car {
    pub fn new(id: i64, brand: String, model: String, year: i32) -> Self {
        Self {
            id,
            brand,
            model,
            year,
            fuel_entries: Vec::new(),
        }
    }

    /// Agregar un repostaje al final del historial.
    /// Las entradas existentes nunca se reordenan ni se eliminan.
    pub fn add_fuel_entry(&mut self, entry: FuelEntry) {
        self.fuel_entries.push(entry);
    }
}

/// Un repostaje: litros cargados, precio pagado y odómetro en ese momento.
/// Inmutable una vez agregado a un Car.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelEntry {
    pub liters: f64,
    pub price: f64,
    pub odometer: i32,
}

impl FuelEntry {
    pub fn new(liters: f64, price: f64, odometer: i32) -> Self {
        Self {
            liters,
            price,
            odometer,
        }
    }
}

/// Estadísticas derivadas del historial de un Car - nunca se persisten
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelStats {
    /// Total de litros cargados
    pub total_fuel: f64,
    /// Total gastado (unidades de moneda sin especificar)
    pub total_cost: f64,
    /// Litros por cada 100 unidades de distancia
    pub avg_consumption: f64,
}
