//! Motor de predicción de vencimientos
//!
//! Para cada regla de intervalo combina el kilometraje/fecha actual del
//! vehículo, el último servicio coincidente y los modificadores para proyectar
//! el próximo vencimiento. El motor es "distancia o tiempo, lo que llegue
//! antes": la fracción consumida es el máximo de ambas. Sin historial no hay
//! proyección y el estado es `Ok` (nunca un falso Overdue por falta de datos).

use crate::models::{
    DuePrediction, DueStatus, IntervalRule, LastServiceRef, MaintenanceModifiers, ServiceRecord,
    VehicleProfile,
};
use crate::services::categorization_service::tag_records;
use chrono::{DateTime, Datelike, Duration, Utc};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Días por mes usado para convertir umbrales de meses a duraciones
const DAYS_PER_MONTH: f64 = 30.4375;

/// Servicio de predicción de vencimientos (puro, sin estado mutable)
pub struct DuePredictionService {
    rules: Arc<Vec<IntervalRule>>,
    modifiers: Arc<MaintenanceModifiers>,
}

impl DuePredictionService {
    pub fn new(rules: Arc<Vec<IntervalRule>>, modifiers: Arc<MaintenanceModifiers>) -> Self {
        Self { rules, modifiers }
    }

    /// Predicciones para un vehículo, ordenadas por urgencia descendente
    /// (empates por prioridad de regla ascendente). `now` se inyecta para que
    /// el resultado sea reproducible.
    pub fn predict_due(
        &self,
        vehicle: &VehicleProfile,
        history: &[ServiceRecord],
        now: DateTime<Utc>,
    ) -> Vec<DuePrediction> {
        let tagged = tag_records(history, &self.rules);

        // Primer registro fechado del vehículo: baseline cuando una regla no
        // tiene ningún servicio coincidente
        let first_known = tagged
            .iter()
            .filter_map(|(record, _)| record.received_at.map(|ts| (*record, ts)))
            .min_by_key(|(_, ts)| *ts);

        let vt_factor = self.modifiers.vehicle_type_factor(&vehicle.vehicle_type);
        let up_factor = self
            .modifiers
            .usage_pattern_factor(vehicle.usage_pattern.as_deref());

        let mut predictions: Vec<DuePrediction> = self
            .rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| {
                let last_match = tagged
                    .iter()
                    .filter(|(record, tag)| *tag == Some(idx) && record.received_at.is_some())
                    .max_by_key(|(record, _)| record.received_at);

                let baseline = last_match
                    .map(|(record, _)| (*record, record.received_at.unwrap_or(now)))
                    .or(first_known);

                let last_record = last_match.map(|(r, _)| *r);
                self.predict_for_rule(rule, vehicle, baseline, last_record, vt_factor, up_factor, now)
            })
            .collect();

        predictions.sort_by(|a, b| {
            b.urgency
                .partial_cmp(&a.urgency)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    let pa = self.rule_priority(&a.rule_name);
                    let pb = self.rule_priority(&b.rule_name);
                    pa.cmp(&pb)
                })
        });

        debug!(
            "🔧 {} predicciones calculadas para {}",
            predictions.len(),
            vehicle.registration
        );
        predictions
    }

    fn rule_priority(&self, rule_name: &str) -> u8 {
        self.rules
            .iter()
            .find(|r| r.name == rule_name)
            .map(|r| r.priority)
            .unwrap_or(u8::MAX)
    }

    fn predict_for_rule(
        &self,
        rule: &IntervalRule,
        vehicle: &VehicleProfile,
        baseline: Option<(&ServiceRecord, DateTime<Utc>)>,
        last_match: Option<&ServiceRecord>,
        vt_factor: f64,
        up_factor: f64,
        now: DateTime<Utc>,
    ) -> DuePrediction {
        let seasonal_notes = self.modifiers.seasonal_notes(&rule.name, now.month());

        let (baseline_record, baseline_date) = match baseline {
            Some(b) => b,
            None => {
                // Sin historial fechado: estado Ok sin proyección
                return DuePrediction {
                    rule_name: rule.name.clone(),
                    last_service: None,
                    due_mileage_km: None,
                    due_date: None,
                    fraction_consumed: 0.0,
                    status: DueStatus::Ok,
                    urgency: 0.0,
                    seasonal_notes,
                };
            }
        };

        let effective_distance = rule.distance_km * vt_factor * up_factor;
        let effective_months = rule.time_months * vt_factor * up_factor;

        let baseline_mileage = baseline_record
            .odometer_km
            .unwrap_or(vehicle.current_mileage_km);

        let due_mileage = baseline_mileage + effective_distance;
        let due_date = baseline_date
            + Duration::seconds((effective_months * DAYS_PER_MONTH * 86_400.0) as i64);

        let distance_fraction =
            ((vehicle.current_mileage_km - baseline_mileage) / effective_distance).max(0.0);
        let months_elapsed = (now - baseline_date).num_days() as f64 / DAYS_PER_MONTH;
        let time_fraction = (months_elapsed / effective_months).max(0.0);

        let fraction_consumed = distance_fraction.max(time_fraction);

        let status = if fraction_consumed >= 1.0 {
            DueStatus::Overdue
        } else if fraction_consumed >= rule.warning_fraction {
            DueStatus::Warning
        } else {
            DueStatus::Ok
        };

        DuePrediction {
            rule_name: rule.name.clone(),
            last_service: last_match.map(|record| LastServiceRef {
                record_id: record.id,
                received_at: record.received_at.unwrap_or(baseline_date),
                odometer_km: record.odometer_km,
            }),
            due_mileage_km: Some(due_mileage),
            due_date: Some(due_date),
            fraction_consumed,
            status,
            urgency: rule.priority_weight() * fraction_consumed,
            seasonal_notes,
        }
    }
}
