//! Modelo de VehicleProfile
//!
//! Perfil de vehículo usado por el motor de predicción. La matrícula es la
//! clave única; el tipo y el patrón de uso indexan las tablas de modificadores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Active,
    Inactive,
    UnderMaintenance,
    Decommissioned,
}

/// Perfil de vehículo (entrada de solo lectura para el motor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub registration: String,
    pub depot_id: Uuid,
    pub status: VehicleStatus,
    pub vehicle_type: String,
    pub usage_pattern: Option<String>,
    pub current_mileage_km: f64,
}
