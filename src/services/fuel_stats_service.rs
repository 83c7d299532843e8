//! Cálculo de estadísticas de combustible
//!
//! Función pura sobre el historial de repostajes de un Car: mismo input,
//! mismo output. No toca el repositorio.

use crate::models::{FuelEntry, FuelStats};

/// Calcular estadísticas sobre una secuencia de repostajes.
///
/// Devuelve `None` para una secuencia vacía. La distancia es
/// max(odómetro) - min(odómetro), independiente del orden de llegada;
/// con distancia 0 (un solo repostaje u odómetro constante) el consumo
/// promedio es 0 en vez de una división por cero.
pub fn compute_fuel_stats(entries: &[FuelEntry]) -> Option<FuelStats> {
    if entries.is_empty() {
        return None;
    }

    let mut total_fuel = 0.0;
    let mut total_cost = 0.0;
    let mut min_odometer = i32::MAX;
    let mut max_odometer = i32::MIN;

    for entry in entries {
        total_fuel += entry.liters;
        total_cost += entry.price;
        min_odometer = min_odometer.min(entry.odometer);
        max_odometer = max_odometer.max(entry.odometer);
    }

    let distance = max_odometer - min_odometer;
    let avg_consumption = if distance > 0 {
        (total_fuel / distance as f64) * 100.0
    } else {
        0.0
    };

    Some(FuelStats {
        total_fuel,
        total_cost,
        avg_consumption,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secuencia_vacia_no_tiene_estadisticas() {
        assert!(compute_fuel_stats(&[]).is_none());
    }

    #[test]
    fn test_calculo_basico() {
        let entries = vec![
            FuelEntry::new(40.0, 52.5, 45000),
            FuelEntry::new(35.0, 55.0, 45500),
        ];

        let stats = compute_fuel_stats(&entries).unwrap();
        assert_eq!(stats.total_fuel, 75.0);
        assert_eq!(stats.total_cost, 107.5);
        // 75 litros sobre 500 unidades de distancia => 15 L/100
        assert_eq!(stats.avg_consumption, 15.0);
    }

    #[test]
    fn test_un_solo_repostaje_da_consumo_cero() {
        let entries = vec![FuelEntry::new(42.0, 60.0, 123456)];

        let stats = compute_fuel_stats(&entries).unwrap();
        assert_eq!(stats.total_fuel, 42.0);
        assert_eq!(stats.total_cost, 60.0);
        assert_eq!(stats.avg_consumption, 0.0);
    }

    #[test]
    fn test_odometro_constante_da_consumo_cero() {
        let entries = vec![
            FuelEntry::new(10.0, 12.0, 50000),
            FuelEntry::new(20.0, 24.0, 50000),
        ];

        let stats = compute_fuel_stats(&entries).unwrap();
        assert_eq!(stats.avg_consumption, 0.0);
    }

    #[test]
    fn test_independiente_del_orden_de_llegada() {
        let ascending = vec![
            FuelEntry::new(40.0, 52.5, 45000),
            FuelEntry::new(35.0, 55.0, 45500),
        ];
        let descending = vec![
            FuelEntry::new(35.0, 55.0, 45500),
            FuelEntry::new(40.0, 52.5, 45000),
        ];

        assert_eq!(
            compute_fuel_stats(&ascending),
            compute_fuel_stats(&descending)
        );
    }
}
