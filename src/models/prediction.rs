//! Modelos de resultados del motor
//!
//! Este módulo contiene las estructuras de salida: predicciones de
//! vencimiento, puntuaciones de rendimiento con nota y buckets de tendencia.
//! Todas son construidas en cada llamada; el llamador las serializa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Estado de vencimiento de un ítem de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueStatus {
    Ok,
    Warning,
    Overdue,
}

/// Referencia al último servicio que coincidió con una regla
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastServiceRef {
    pub record_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub odometer_km: Option<f64>,
}

/// Predicción de vencimiento para una regla sobre un vehículo
///
/// `due_mileage_km` y `due_date` quedan en `None` cuando no hay historial:
/// sin datos no se proyecta nada y el estado es `Ok` (nunca un falso Overdue).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuePrediction {
    pub rule_name: String,
    pub last_service: Option<LastServiceRef>,
    pub due_mileage_km: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
    pub fraction_consumed: f64,
    pub status: DueStatus,
    pub urgency: f64,
    pub seasonal_notes: Vec<String>,
}

/// Nota en letra derivada de la puntuación numérica
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Grade {
    /// Umbrales inclusivos en el límite inferior: 90.0 exacto es A, 80.0 es B
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NotAvailable => "N/A",
        };
        write!(f, "{}", s)
    }
}

/// Puntuación de rendimiento para un ámbito (depósito, usuario o vehículo)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub score: f64,
    pub grade: Grade,
    pub completion_rate: f64,
    pub overdue_rate: f64,
    pub total_records: usize,
}

/// Periodo de agrupación para las tendencias
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Bucket de tendencia para un periodo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendBucket {
    pub key: String,
    pub total: usize,
    pub maintenance_count: usize,
    pub cleaning_count: usize,
    pub tires_count: usize,
    pub average_priority: f64,
}
