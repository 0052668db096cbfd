//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y helpers numéricos comunes.

pub mod errors;

pub use errors::*;

/// Redondeo a 1 decimal usado por promedios y tasas del motor
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
