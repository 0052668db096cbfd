//! Tablas de referencia de intervalos de mantenimiento
//!
//! Config-as-data: la tabla de reglas y los modificadores se cargan una vez
//! al arrancar el proceso y se comparten como datos inmutables vía `Arc`.
//! Una recarga construye un `Arc` nuevo; ningún cálculo en vuelo observa una
//! tabla a medio actualizar.

use crate::models::{IntervalRule, MaintenanceModifiers, SeasonalAdjustment};
use crate::utils::errors::{AnalyticsError, AnalyticsResult};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

fn rule(
    name: &str,
    distance_km: f64,
    time_months: f64,
    priority: u8,
    keywords: &[&str],
    warning_fraction: f64,
) -> IntervalRule {
    IntervalRule {
        name: name.to_string(),
        distance_km,
        time_months,
        priority,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        warning_fraction,
    }
}

lazy_static! {
    /// Tabla built-in de reglas, ordenada de más específica a menos específica
    /// (el categorizador resuelve empates por orden de lista)
    pub static ref DEFAULT_INTERVAL_RULES: Vec<IntervalRule> = vec![
        rule(
            "engine-oil-filter",
            10_000.0,
            6.0,
            1,
            &["oil filter", "engine oil", "oil change", "filtro de aceite", "cambio de aceite", "aceite motor"],
            0.8,
        ),
        rule(
            "brake-service",
            30_000.0,
            12.0,
            1,
            &["brake pad", "brake disc", "brakes", "pastillas de freno", "frenos", "disco de freno"],
            0.8,
        ),
        rule(
            "tire-rotation",
            15_000.0,
            6.0,
            2,
            &["tire rotation", "tyre", "tires", "neumáticos", "rotación de ruedas", "cambio de ruedas"],
            0.75,
        ),
        rule(
            "coolant-flush",
            60_000.0,
            24.0,
            2,
            &["coolant", "antifreeze", "radiator flush", "refrigerante", "anticongelante"],
            0.8,
        ),
        rule(
            "annual-inspection",
            40_000.0,
            12.0,
            1,
            &["inspection", "itv", "revisión anual", "inspección técnica"],
            0.9,
        ),
        rule(
            "deep-cleaning",
            20_000.0,
            3.0,
            3,
            &["deep clean", "interior cleaning", "wash", "limpieza a fondo", "lavado"],
            0.7,
        ),
    ];

    /// Modificadores built-in: factores por tipo de vehículo y patrón de uso,
    /// más los avisos estacionales
    pub static ref DEFAULT_MODIFIERS: MaintenanceModifiers = MaintenanceModifiers {
        vehicle_type: HashMap::from([
            ("van".to_string(), 1.0),
            ("light_truck".to_string(), 0.9),
            ("heavy_truck".to_string(), 0.8),
            ("refrigerated".to_string(), 0.85),
        ]),
        usage_pattern: HashMap::from([
            ("urban".to_string(), 0.9),
            ("mixed".to_string(), 1.0),
            ("highway".to_string(), 1.1),
        ]),
        seasonal: vec![
            SeasonalAdjustment {
                months: vec![10, 11],
                description: "Temporada de neumáticos de invierno: revisar dibujo y presión".to_string(),
                rule_names: vec!["tire-rotation".to_string()],
            },
            SeasonalAdjustment {
                months: vec![3, 4],
                description: "Fin de invierno: volver a neumáticos de verano".to_string(),
                rule_names: vec!["tire-rotation".to_string()],
            },
            SeasonalAdjustment {
                months: vec![6, 7, 8],
                description: "Verano: comprobar nivel de refrigerante antes de rutas largas".to_string(),
                rule_names: vec!["coolant-flush".to_string()],
            },
        ],
    };
}

/// Valida una tabla de reglas completa: campos en rango y nombres únicos
pub fn validate_rules(rules: &[IntervalRule]) -> AnalyticsResult<()> {
    let mut seen = std::collections::HashSet::new();
    for r in rules {
        r.validate()
            .map_err(|e| AnalyticsError::InvalidRule(format!("regla '{}': {}", r.name, e)))?;
        if !seen.insert(r.name.as_str()) {
            return Err(AnalyticsError::InvalidRule(format!(
                "nombre de regla duplicado: '{}'",
                r.name
            )));
        }
    }
    Ok(())
}

/// Carga y valida una tabla de reglas desde un archivo JSON
pub fn load_rules_from_json(path: &str) -> AnalyticsResult<Vec<IntervalRule>> {
    let raw = fs::read_to_string(path)?;
    let rules: Vec<IntervalRule> = serde_json::from_str(&raw)?;
    validate_rules(&rules)?;
    info!("📋 {} reglas de intervalo cargadas desde {}", rules.len(), path);
    Ok(rules)
}

/// Carga las tablas de modificadores desde un archivo JSON
pub fn load_modifiers_from_json(path: &str) -> AnalyticsResult<MaintenanceModifiers> {
    let raw = fs::read_to_string(path)?;
    let modifiers: MaintenanceModifiers = serde_json::from_str(&raw)?;
    info!("📋 Modificadores cargados desde {}", path);
    Ok(modifiers)
}

/// Resuelve la tabla de reglas según la configuración: archivo si hay ruta,
/// tabla built-in en caso contrario
pub fn resolve_rules(config: &super::environment::AnalyticsConfig) -> AnalyticsResult<Arc<Vec<IntervalRule>>> {
    match &config.interval_rules_path {
        Some(path) => Ok(Arc::new(load_rules_from_json(path)?)),
        None => Ok(Arc::new(DEFAULT_INTERVAL_RULES.clone())),
    }
}

/// Resuelve los modificadores según la configuración
pub fn resolve_modifiers(
    config: &super::environment::AnalyticsConfig,
) -> AnalyticsResult<Arc<MaintenanceModifiers>> {
    match &config.modifiers_path {
        Some(path) => Ok(Arc::new(load_modifiers_from_json(path)?)),
        None => Ok(Arc::new(DEFAULT_MODIFIERS.clone())),
    }
}
