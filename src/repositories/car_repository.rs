//! Repositorio in-memory de Cars
//!
//! Dueño único de todos los Car del proceso. El estado compartido es
//! exactamente el mapa id -> Car (RwLock) y el contador de ids (atómico);
//! los callers no necesitan ningún locking externo.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::models::{Car, FuelEntry};

/// Generador de identificadores únicos y estrictamente crecientes.
/// Dos llamadas concurrentes nunca devuelven el mismo valor.
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(1),
        }
    }

    /// Devuelve el siguiente id, empezando en 1.
    pub fn next(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CarRepository {
    cars: RwLock<HashMap<i64, Car>>,
    id_generator: IdGenerator,
}

impl CarRepository {
    pub fn new() -> Self {
        Self {
            cars: RwLock::new(HashMap::new()),
            id_generator: IdGenerator::new(),
        }
    }

    /// Crear un Car sin historial de combustible. No valida nada: la
    /// validación de payload vive en la capa HTTP.
    pub async fn create(&self, brand: String, model: String, year: i32) -> Car {
        let id = self.id_generator.next();
        let car = Car::new(id, brand, model, year);

        let mut cars = self.cars.write().await;
        cars.insert(id, car.clone());

        car
    }

    /// Listar todos los Car en orden de creación (id ascendente).
    pub async fn list_all(&self) -> Vec<Car> {
        let cars = self.cars.read().await;
        let mut all: Vec<Car> = cars.values().cloned().collect();
        all.sort_by_key(|car| car.id);
        all
    }

    /// Buscar un Car por id. Devuelve un clon; el estado interno no se expone.
    pub async fn find_by_id(&self, id: i64) -> Option<Car> {
        let cars = self.cars.read().await;
        cars.get(&id).cloned()
    }

    /// Agregar un repostaje al Car indicado. Devuelve false si el Car no
    /// existe; "no encontrado" es un resultado normal, no un error.
    pub async fn add_fuel_entry(&self, car_id: i64, liters: f64, price: f64, odometer: i32) -> bool {
        let mut cars = self.cars.write().await;

        match cars.get_mut(&car_id) {
            Some(car) => {
                car.add_fuel_entry(FuelEntry::new(liters, price, odometer));
                true
            }
            None => false,
        }
    }
}

impl Default for CarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_id_generator_empieza_en_uno() {
        let gen = IdGenerator::new();
        assert_eq!(gen.next(), 1);
        assert_eq!(gen.next(), 2);
        assert_eq!(gen.next(), 3);
    }

    #[tokio::test]
    async fn test_create_asigna_ids_crecientes() {
        let repo = CarRepository::new();

        let a = repo.create("Toyota".into(), "Corolla".into(), 2019).await;
        let b = repo.create("Renault".into(), "Clio".into(), 2021).await;

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.fuel_entries.is_empty());
    }

    #[tokio::test]
    async fn test_ids_unicos_bajo_concurrencia() {
        let repo = Arc::new(CarRepository::new());

        let mut handles = Vec::new();
        for i in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(format!("Brand{}", i), "Model".into(), 2020)
                    .await
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50, "hubo ids duplicados bajo concurrencia");
        assert_eq!(*ids.first().unwrap(), 1);
        assert_eq!(*ids.last().unwrap(), 50);
    }

    #[tokio::test]
    async fn test_list_all_devuelve_orden_de_creacion() {
        let repo = CarRepository::new();
        for i in 0..5 {
            repo.create(format!("Brand{}", i), "Model".into(), 2020).await;
        }

        let all = repo.list_all().await;
        assert_eq!(all.len(), 5);
        let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_add_fuel_entry_a_car_desconocido() {
        let repo = CarRepository::new();
        let ok = repo.add_fuel_entry(99, 40.0, 52.5, 45000).await;

        assert!(!ok);
        // No debe crear el car como efecto secundario
        assert!(repo.find_by_id(99).await.is_none());
        assert!(repo.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_fuel_entry_conserva_orden_de_llegada() {
        let repo = CarRepository::new();
        let car = repo.create("Seat".into(), "Ibiza".into(), 2018).await;

        assert!(repo.add_fuel_entry(car.id, 40.0, 52.5, 45500).await);
        assert!(repo.add_fuel_entry(car.id, 35.0, 55.0, 45000).await);

        let stored = repo.find_by_id(car.id).await.unwrap();
        assert_eq!(stored.fuel_entries.len(), 2);
        // Orden de llegada, no orden de odómetro
        assert_eq!(stored.fuel_entries[0].odometer, 45500);
        assert_eq!(stored.fuel_entries[1].odometer, 45000);
    }

    #[tokio::test]
    async fn test_el_clon_devuelto_no_muta_el_repositorio() {
        let repo = CarRepository::new();
        let mut car = repo.create("Fiat".into(), "Panda".into(), 2015).await;

        car.add_fuel_entry(FuelEntry::new(10.0, 15.0, 1000));

        let stored = repo.find_by_id(car.id).await.unwrap();
        assert!(stored.fuel_entries.is_empty());
    }
}
