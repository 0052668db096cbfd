//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: ruta opcional de la tabla
//! de reglas y datos del servicio externo de predicción.

use std::env;

/// Configuración del entorno para el motor de analítica
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Ruta a un JSON con reglas de intervalo que reemplaza la tabla built-in
    pub interval_rules_path: Option<String>,
    /// Ruta a un JSON con modificadores que reemplaza los built-in
    pub modifiers_path: Option<String>,
    /// URL del servicio externo de predicción (si no está, solo fallback local)
    pub prediction_service_url: Option<String>,
    /// Timeout en segundos para el servicio externo de predicción
    pub prediction_timeout_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            interval_rules_path: env::var("INTERVAL_RULES_PATH").ok(),
            modifiers_path: env::var("MODIFIERS_PATH").ok(),
            prediction_service_url: env::var("PREDICTION_SERVICE_URL").ok(),
            prediction_timeout_secs: env::var("PREDICTION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl AnalyticsConfig {
    /// Carga la configuración leyendo primero un .env si existe
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default()
    }

    /// Indica si hay un servicio externo de predicción configurado
    pub fn has_prediction_service(&self) -> bool {
        self.prediction_service_url.is_some()
    }
}
