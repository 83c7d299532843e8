//! Modelos del sistema
//!
//! Este módulo contiene los tipos de dominio del backend de combustible.

pub mod car;

pub use car::{Car, FuelEntry, FuelStats};
