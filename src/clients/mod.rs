//! Clientes de colaboradores externos
//!
//! Este módulo contiene el cliente del servicio remoto de predicción y la
//! fachada con política de fallback al motor local.

pub mod prediction_client;

pub use prediction_client::{NextServicePredictor, PredictionFacade, RemotePredictionClient};
