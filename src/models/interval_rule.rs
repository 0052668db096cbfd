//! Modelo de IntervalRule y tablas de modificadores
//!
//! Datos de referencia del motor: definiciones de ítems de mantenimiento con
//! umbrales de distancia/tiempo, lista de keywords y fracción de aviso, más
//! las tablas de modificadores por tipo de vehículo y patrón de uso.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Regla de intervalo de mantenimiento
///
/// Las keywords son case-insensitive y multilingües; el llamador entrega las
/// reglas ordenadas de más específica a menos específica porque el
/// categorizador resuelve empates por orden de lista.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IntervalRule {
    pub name: String,

    #[validate(range(min = 1.0))]
    pub distance_km: f64,

    #[validate(range(min = 0.1))]
    pub time_months: f64,

    #[validate(range(min = 1, max = 3))]
    pub priority: u8,

    #[validate(length(min = 1))]
    pub keywords: Vec<String>,

    #[validate(range(min = 0.01, max = 1.0))]
    pub warning_fraction: f64,
}

impl IntervalRule {
    /// Peso de prioridad para urgencia: prioridad 1 pesa más que prioridad 3
    pub fn priority_weight(&self) -> f64 {
        match self.priority {
            1 => 3.0,
            2 => 2.0,
            _ => 1.0,
        }
    }
}

/// Aviso estacional: meses del calendario en los que aplica una recomendación.
/// Si `rule_names` está vacío, el aviso aplica a todas las reglas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    pub months: Vec<u32>,
    pub description: String,
    #[serde(default)]
    pub rule_names: Vec<String>,
}

impl SeasonalAdjustment {
    pub fn applies_to(&self, rule_name: &str, month: u32) -> bool {
        self.months.contains(&month)
            && (self.rule_names.is_empty() || self.rule_names.iter().any(|n| n == rule_name))
    }
}

/// Tablas de modificadores multiplicativos para los umbrales efectivos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceModifiers {
    #[serde(default)]
    pub vehicle_type: HashMap<String, f64>,
    #[serde(default)]
    pub usage_pattern: HashMap<String, f64>,
    #[serde(default)]
    pub seasonal: Vec<SeasonalAdjustment>,
}

impl MaintenanceModifiers {
    /// Factor por tipo de vehículo; 1.0 si el tipo no está en la tabla
    pub fn vehicle_type_factor(&self, vehicle_type: &str) -> f64 {
        self.vehicle_type.get(vehicle_type).copied().unwrap_or(1.0)
    }

    /// Factor por patrón de uso; 1.0 si no hay patrón o no está en la tabla
    pub fn usage_pattern_factor(&self, usage_pattern: Option<&str>) -> f64 {
        usage_pattern
            .and_then(|p| self.usage_pattern.get(p).copied())
            .unwrap_or(1.0)
    }

    /// Avisos estacionales vigentes para una regla en el mes dado
    pub fn seasonal_notes(&self, rule_name: &str, month: u32) -> Vec<String> {
        self.seasonal
            .iter()
            .filter(|adj| adj.applies_to(rule_name, month))
            .map(|adj| adj.description.clone())
            .collect()
    }
}
