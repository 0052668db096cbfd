//! Motor de puntuación de rendimiento
//!
//! Calcula tasa de cierre y tasa de vencidos-sin-respuesta para un ámbito
//! (depósito, usuario o vehículo) y las combina en una puntuación 0-100 con
//! nota en letra. Los vencidos penalizan al doble de lo que premia el cierre,
//! para sesgar la nota hacia la capacidad de respuesta.

use crate::models::{Grade, PerformanceScore, Priority, ServiceRecord};
use crate::utils::round1;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Límites de respuesta en días por prioridad
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseLimits {
    pub high_days: i64,
    pub medium_days: i64,
    pub low_days: i64,
}

impl Default for ResponseLimits {
    fn default() -> Self {
        Self {
            high_days: Priority::High.response_limit_days(),
            medium_days: Priority::Medium.response_limit_days(),
            low_days: Priority::Low.response_limit_days(),
        }
    }
}

impl ResponseLimits {
    pub fn limit_for(&self, priority: Priority) -> i64 {
        match priority {
            Priority::High => self.high_days,
            Priority::Medium => self.medium_days,
            Priority::Low => self.low_days,
        }
    }
}

/// Servicio de puntuación de rendimiento
pub struct PerformanceScoringService {
    limits: ResponseLimits,
}

impl PerformanceScoringService {
    pub fn new(limits: ResponseLimits) -> Self {
        Self { limits }
    }

    /// Puntúa una colección de registros. Colección vacía devuelve el
    /// resultado "N/A" (score 0) en lugar de dividir por cero.
    pub fn score(&self, records: &[ServiceRecord], now: DateTime<Utc>) -> PerformanceScore {
        let total = records.len();
        if total == 0 {
            return PerformanceScore {
                score: 0.0,
                grade: Grade::NotAvailable,
                completion_rate: 0.0,
                overdue_rate: 0.0,
                total_records: 0,
            };
        }

        let closed = records.iter().filter(|r| r.is_closed()).count();
        let overdue = records
            .iter()
            .filter(|r| self.is_overdue_for_response(r, now))
            .count();

        let completion_rate = closed as f64 / total as f64 * 100.0;
        let overdue_rate = overdue as f64 / total as f64 * 100.0;
        let score = (completion_rate - 2.0 * overdue_rate).clamp(0.0, 100.0);

        debug!(
            "📊 {} registros: cierre {:.1}%, vencidos {:.1}%, score {:.1}",
            total, completion_rate, overdue_rate, score
        );

        PerformanceScore {
            score,
            grade: Grade::from_score(score),
            completion_rate: round1(completion_rate),
            overdue_rate: round1(overdue_rate),
            total_records: total,
        }
    }

    /// Un registro está vencido-sin-respuesta si no está cerrado, no tiene
    /// timestamp de respuesta y su límite de prioridad ya pasó. Registros sin
    /// fecha de recepción no pueden evaluarse y no cuentan como vencidos.
    fn is_overdue_for_response(&self, record: &ServiceRecord, now: DateTime<Utc>) -> bool {
        if record.is_closed() || record.responded_at.is_some() {
            return false;
        }
        match record.received_at {
            Some(received) => {
                now - received > Duration::days(self.limits.limit_for(record.priority))
            }
            None => false,
        }
    }
}
