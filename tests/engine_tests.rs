//! Tests de integración del motor de analítica
//!
//! Flujo completo sobre un depósito sintético con `now` fijo: etiquetado,
//! predicción de vencimientos, puntuación y tendencias, más las propiedades
//! de idempotencia y consistencia de totales.

use chrono::{DateTime, Duration, TimeZone, Utc};
use maintenance_analytics::{
    aggregate, average_response_hours, tag_records, AnalyticsConfig, DuePredictionService,
    DueStatus, Grade, MaintenanceCategory, PerformanceScoringService, Priority, RecordStatus,
    ResponseLimits, ServiceRecord, TrendPeriod, VehicleProfile, VehicleStatus,
    DEFAULT_INTERVAL_RULES, DEFAULT_MODIFIERS,
};
use std::sync::Arc;
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
}

fn depot_id() -> Uuid {
    Uuid::nil()
}

fn record(
    description: &str,
    category: MaintenanceCategory,
    priority: Priority,
    status: RecordStatus,
    received_at: Option<DateTime<Utc>>,
    responded_at: Option<DateTime<Utc>>,
    odometer_km: Option<f64>,
) -> ServiceRecord {
    ServiceRecord {
        id: Uuid::new_v4(),
        vehicle_registration: "FLT-001".to_string(),
        depot_id: depot_id(),
        received_at,
        responded_at,
        status,
        priority,
        category,
        description: description.to_string(),
        response: None,
        odometer_km,
    }
}

fn fleet_vehicle() -> VehicleProfile {
    VehicleProfile {
        registration: "FLT-001".to_string(),
        depot_id: depot_id(),
        status: VehicleStatus::Active,
        vehicle_type: "van".to_string(),
        usage_pattern: Some("mixed".to_string()),
        current_mileage_km: 82_000.0,
    }
}

/// Historial sintético del depósito: tres meses de actividad con un cambio de
/// aceite antiguo, servicios cerrados, abiertos en plazo y vencidos
fn depot_history(now: DateTime<Utc>) -> Vec<ServiceRecord> {
    vec![
        record(
            "Cambio de aceite y filtro de aceite",
            MaintenanceCategory::Maintenance,
            Priority::High,
            RecordStatus::Closed,
            Some(now - Duration::days(200)),
            Some(now - Duration::days(199)),
            Some(72_500.0),
        ),
        record(
            "Rotación de neumáticos delanteros",
            MaintenanceCategory::Tires,
            Priority::Medium,
            RecordStatus::Closed,
            Some(now - Duration::days(80)),
            Some(now - Duration::days(79)),
            Some(78_000.0),
        ),
        record(
            "Lavado y limpieza a fondo de cabina",
            MaintenanceCategory::Cleaning,
            Priority::Low,
            RecordStatus::Closed,
            Some(now - Duration::days(45)),
            Some(now - Duration::days(44)),
            None,
        ),
        record(
            "Revisión de frenos: pastillas de freno gastadas",
            MaintenanceCategory::Maintenance,
            Priority::High,
            RecordStatus::New,
            Some(now - Duration::days(6)),
            None,
            Some(81_500.0),
        ),
        record(
            "Ruido en suspensión",
            MaintenanceCategory::Maintenance,
            Priority::Low,
            RecordStatus::Approved,
            Some(now - Duration::hours(10)),
            None,
            None,
        ),
        // Timestamp ilegible en origen: cuenta en totales, fuera de fechas
        record(
            "Registro sin fecha de recepción",
            MaintenanceCategory::Operation,
            Priority::Low,
            RecordStatus::New,
            None,
            None,
            None,
        ),
    ]
}

fn prediction_service() -> DuePredictionService {
    DuePredictionService::new(
        Arc::new(DEFAULT_INTERVAL_RULES.clone()),
        Arc::new(DEFAULT_MODIFIERS.clone()),
    )
}

#[test]
fn test_full_flow_over_synthetic_depot() {
    init_tracing();
    let now = fixed_now();
    let history = depot_history(now);
    let vehicle = fleet_vehicle();

    // Etiquetado previo: el cambio de aceite y los frenos coinciden con reglas
    let tagged = tag_records(&history, &DEFAULT_INTERVAL_RULES);
    assert!(tagged[0].1.is_some());
    assert!(tagged[3].1.is_some());
    assert!(tagged[5].1.is_none());

    // Predicción: el aceite (9.500 km recorridos de 10.000, ~6,6 meses de 6)
    // está vencido y encabeza la lista por urgencia
    let predictions = prediction_service().predict_due(&vehicle, &history, now);
    assert_eq!(predictions.len(), DEFAULT_INTERVAL_RULES.len());

    let oil = predictions
        .iter()
        .find(|p| p.rule_name == "engine-oil-filter")
        .unwrap();
    assert_eq!(oil.status, DueStatus::Overdue);
    assert_eq!(predictions[0].rule_name, "engine-oil-filter");

    // Puntuación: 3 de 6 cerrados (50%), 1 vencido sin respuesta (frenos High
    // a 6 días), 16.7% de vencidos: score = clamp(50 - 33.3) = 16.7 -> F
    let score = PerformanceScoringService::new(ResponseLimits::default()).score(&history, now);
    assert_eq!(score.total_records, 6);
    assert_eq!(score.completion_rate, 50.0);
    assert_eq!(score.overdue_rate, 16.7);
    assert_eq!(score.grade, Grade::F);

    // Tendencia mensual: solo los 5 registros fechados entran en buckets
    let buckets = aggregate(&history, TrendPeriod::Monthly);
    let total: usize = buckets.iter().map(|b| b.total).sum();
    assert_eq!(total, 5);
    let keys: Vec<_> = buckets.iter().map(|b| b.key.clone()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // Tiempo de respuesta: tres registros respondidos, 24h cada uno
    assert_eq!(average_response_hours(&history), 24.0);
}

#[test]
fn test_idempotence_identical_outputs() {
    let now = fixed_now();
    let history = depot_history(now);
    let vehicle = fleet_vehicle();
    let service = prediction_service();
    let scoring = PerformanceScoringService::new(ResponseLimits::default());

    let first = serde_json::to_string(&service.predict_due(&vehicle, &history, now)).unwrap();
    let second = serde_json::to_string(&service.predict_due(&vehicle, &history, now)).unwrap();
    assert_eq!(first, second);

    let score_a = serde_json::to_string(&scoring.score(&history, now)).unwrap();
    let score_b = serde_json::to_string(&scoring.score(&history, now)).unwrap();
    assert_eq!(score_a, score_b);

    let trend_a = serde_json::to_string(&aggregate(&history, TrendPeriod::Weekly)).unwrap();
    let trend_b = serde_json::to_string(&aggregate(&history, TrendPeriod::Weekly)).unwrap();
    assert_eq!(trend_a, trend_b);
}

#[test]
fn test_unknown_vehicle_never_overdue() {
    // Vehículo sin historial: ninguna regla puede marcar Overdue
    let now = fixed_now();
    let predictions = prediction_service().predict_due(&fleet_vehicle(), &[], now);

    assert!(predictions.iter().all(|p| p.status == DueStatus::Ok));
    assert!(predictions.iter().all(|p| p.due_date.is_none()));
}

#[test]
fn test_grade_serializes_na() {
    let score = PerformanceScoringService::new(ResponseLimits::default()).score(&[], fixed_now());
    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["grade"], "N/A");
    assert_eq!(json["score"], 0.0);
}

#[tokio::test]
async fn test_facade_without_remote_matches_local_engine() {
    use maintenance_analytics::PredictionFacade;

    let now = fixed_now();
    let history = depot_history(now);
    let vehicle = fleet_vehicle();

    let facade = PredictionFacade::new(None, prediction_service());
    let via_facade = facade.predict(&vehicle, &history, now).await;
    let direct = prediction_service().predict_due(&vehicle, &history, now);

    assert_eq!(
        serde_json::to_string(&via_facade).unwrap(),
        serde_json::to_string(&direct).unwrap()
    );
}

#[test]
fn test_config_defaults_without_env() {
    let config = AnalyticsConfig::from_env();
    // Sin variables definidas el timeout cae al valor por defecto
    if std::env::var("PREDICTION_TIMEOUT_SECS").is_err() {
        assert_eq!(config.prediction_timeout_secs, 10);
    }
}
