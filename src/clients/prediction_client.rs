//! Cliente del servicio externo de predicción
//!
//! Colaborador opcional: un servicio remoto (basado en reglas o ML) que
//! devuelve pronósticos de próximo servicio por vehículo. Si no está
//! configurado, falla o supera el timeout, el fallback documentado es el motor
//! local de predicción por intervalos.

use crate::models::{DuePrediction, ServiceRecord, VehicleProfile};
use crate::services::DuePredictionService;
use crate::utils::errors::{AnalyticsError, AnalyticsResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct ForecastRequest<'a> {
    vehicle: &'a VehicleProfile,
    history: &'a [ServiceRecord],
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    predictions: Vec<DuePrediction>,
}

/// Contrato del pronosticador de próximo servicio
#[async_trait]
pub trait NextServicePredictor: Send + Sync {
    async fn forecast(
        &self,
        vehicle: &VehicleProfile,
        history: &[ServiceRecord],
    ) -> AnalyticsResult<Vec<DuePrediction>>;
}

/// Cliente HTTP del servicio remoto de predicción
pub struct RemotePredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemotePredictionClient {
    pub fn new(base_url: String, timeout_secs: u64) -> AnalyticsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalyticsError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl NextServicePredictor for RemotePredictionClient {
    async fn forecast(
        &self,
        vehicle: &VehicleProfile,
        history: &[ServiceRecord],
    ) -> AnalyticsResult<Vec<DuePrediction>> {
        let url = format!("{}/forecast", self.base_url.trim_end_matches('/'));
        info!("🔮 Solicitando pronóstico remoto para {}", vehicle.registration);

        let response = self
            .client
            .post(&url)
            .json(&ForecastRequest { vehicle, history })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::PredictionService(format!(
                "estado HTTP {} de {}",
                status, url
            )));
        }

        let body: ForecastResponse = response.json().await?;
        Ok(body.predictions)
    }
}

/// Fachada con política de fallback: intenta el servicio remoto si está
/// configurado y cae al motor local ante cualquier fallo. Nunca falla.
pub struct PredictionFacade {
    remote: Option<Box<dyn NextServicePredictor>>,
    local: DuePredictionService,
}

impl PredictionFacade {
    pub fn new(remote: Option<Box<dyn NextServicePredictor>>, local: DuePredictionService) -> Self {
        Self { remote, local }
    }

    /// Pronóstico con fallback: remoto si responde, motor local si no
    pub async fn predict(
        &self,
        vehicle: &VehicleProfile,
        history: &[ServiceRecord],
        now: DateTime<Utc>,
    ) -> Vec<DuePrediction> {
        if let Some(remote) = &self.remote {
            match remote.forecast(vehicle, history).await {
                Ok(predictions) => return predictions,
                Err(e) => {
                    warn!(
                        "⚠️ Servicio de predicción no disponible ({}), usando motor local",
                        e
                    );
                }
            }
        }
        self.local.predict_due(vehicle, history, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_INTERVAL_RULES, DEFAULT_MODIFIERS};
    use crate::models::VehicleStatus;
    use chrono::TimeZone;
    use std::sync::Arc;
    use uuid::Uuid;

    struct FailingPredictor;

    #[async_trait]
    impl NextServicePredictor for FailingPredictor {
        async fn forecast(
            &self,
            _vehicle: &VehicleProfile,
            _history: &[ServiceRecord],
        ) -> AnalyticsResult<Vec<DuePrediction>> {
            Err(AnalyticsError::PredictionService("timeout".to_string()))
        }
    }

    fn test_vehicle() -> VehicleProfile {
        VehicleProfile {
            registration: "FLT-001".to_string(),
            depot_id: Uuid::new_v4(),
            status: VehicleStatus::Active,
            vehicle_type: "van".to_string(),
            usage_pattern: None,
            current_mileage_km: 50_000.0,
        }
    }

    fn local_service() -> DuePredictionService {
        DuePredictionService::new(
            Arc::new(DEFAULT_INTERVAL_RULES.clone()),
            Arc::new(DEFAULT_MODIFIERS.clone()),
        )
    }

    #[tokio::test]
    async fn test_fallback_on_remote_failure() {
        let facade = PredictionFacade::new(Some(Box::new(FailingPredictor)), local_service());
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        let predictions = facade.predict(&test_vehicle(), &[], now).await;
        // El motor local siempre devuelve una predicción por regla
        assert_eq!(predictions.len(), DEFAULT_INTERVAL_RULES.len());
    }

    #[tokio::test]
    async fn test_no_remote_configured_uses_local() {
        let facade = PredictionFacade::new(None, local_service());
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        let predictions = facade.predict(&test_vehicle(), &[], now).await;
        assert_eq!(predictions.len(), DEFAULT_INTERVAL_RULES.len());
    }
}
