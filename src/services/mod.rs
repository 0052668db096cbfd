//! Servicios del motor de analítica
//!
//! Este módulo contiene los motores puros: categorización por keywords,
//! predicción de vencimientos, puntuación de rendimiento, tendencias y tiempo
//! de respuesta. Todos son cálculos síncronos sobre colecciones inmutables.

pub mod categorization_service;
pub mod due_prediction_service;
pub mod performance_service;
pub mod response_time_service;
pub mod trend_service;

pub use categorization_service::{categorize, tag_records};
pub use due_prediction_service::DuePredictionService;
pub use performance_service::{PerformanceScoringService, ResponseLimits};
pub use response_time_service::average_response_hours;
pub use trend_service::aggregate;
