//! Motor de analítica y predicción de mantenimiento de flotas
//!
//! Librería de cálculo puro: a partir del historial de servicios de un
//! vehículo y una tabla de reglas de intervalo produce predicciones de
//! vencimiento, puntuaciones de rendimiento por ámbito, tendencias por
//! periodo y estadísticas de tiempo de respuesta. El almacenamiento, la API
//! HTTP y el renderizado son colaboradores externos; aquí solo entran
//! colecciones ya materializadas y sale un resultado estructurado.
//!
//! Mismas entradas (incluido el instante `now`, siempre explícito) producen
//! siempre las mismas salidas.

pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use clients::{NextServicePredictor, PredictionFacade, RemotePredictionClient};
pub use config::{AnalyticsConfig, DEFAULT_INTERVAL_RULES, DEFAULT_MODIFIERS};
pub use models::*;
pub use services::{
    aggregate, average_response_hours, categorize, tag_records, DuePredictionService,
    PerformanceScoringService, ResponseLimits,
};
pub use utils::errors::{AnalyticsError, AnalyticsResult};
