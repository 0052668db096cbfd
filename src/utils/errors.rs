//! Sistema de manejo de errores
//!
//! Los cálculos del motor nunca fallan: datos malformados, vacíos o sin
//! referencia degradan a valores por defecto documentados. Los errores solo
//! aparecen en los bordes falibles: carga de tablas de referencia y el
//! servicio externo de predicción.

use thiserror::Error;

/// Errores de los bordes falibles del crate
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid interval rule: {0}")]
    InvalidRule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prediction service error: {0}")]
    PredictionService(String),
}

impl From<reqwest::Error> for AnalyticsError {
    fn from(e: reqwest::Error) -> Self {
        AnalyticsError::PredictionService(e.to_string())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
