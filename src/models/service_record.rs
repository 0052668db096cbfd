//! Modelo de ServiceRecord
//!
//! Este módulo contiene el registro histórico de servicio tal como lo entrega
//! el colaborador de almacenamiento: colecciones ya filtradas, inmutables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del registro de servicio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordStatus {
    New,
    Approved,
    OrderCreated,
    Closed,
}

/// Prioridad del registro, con límites fijos de respuesta en días
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Código numérico (1 = más urgente) usado para promedios y desempates
    pub fn code(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Días límite para responder según la prioridad
    pub fn response_limit_days(&self) -> i64 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Peso de la prioridad para el cálculo de urgencia (mayor peso = más urgente)
    pub fn weight(&self) -> f64 {
        match self {
            Priority::High => 3.0,
            Priority::Medium => 2.0,
            Priority::Low => 1.0,
        }
    }
}

/// Categoría de mantenimiento del registro
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaintenanceCategory {
    Maintenance,
    Cleaning,
    Tires,
    Rental,
    Operation,
}

/// Registro histórico de servicio
///
/// `received_at` es `None` cuando el timestamp original no se pudo parsear:
/// el registro cuenta en los totales pero queda excluido de todo cálculo
/// dependiente de fechas. Invariante (garantizado por el colaborador de
/// almacenamiento): si ambos timestamps existen, `responded_at >= received_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_registration: String,
    pub depot_id: Uuid,
    pub received_at: Option<DateTime<Utc>>,
    pub responded_at: Option<DateTime<Utc>>,
    pub status: RecordStatus,
    pub priority: Priority,
    pub category: MaintenanceCategory,
    pub description: String,
    pub response: Option<String>,
    pub odometer_km: Option<f64>,
}

impl ServiceRecord {
    pub fn is_closed(&self) -> bool {
        self.status == RecordStatus::Closed
    }

    /// Horas transcurridas entre recepción y respuesta, si ambas existen
    pub fn response_hours(&self) -> Option<f64> {
        let received = self.received_at?;
        let responded = self.responded_at?;
        Some((responded - received).num_seconds() as f64 / 3600.0)
    }
}
