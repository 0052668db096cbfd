//! Calculadora de tiempo de respuesta
//!
//! Media de horas entre recepción y respuesta sobre los registros que tienen
//! ambos timestamps. Reutilizada por los motores de puntuación y tendencia a
//! través de los informes del llamador.

use crate::models::ServiceRecord;
use crate::utils::round1;

/// Media aritmética de horas de respuesta, redondeada a 1 decimal.
/// Sin registros elegibles devuelve 0.0 (nunca NaN ni división por cero).
pub fn average_response_hours(records: &[ServiceRecord]) -> f64 {
    let hours: Vec<f64> = records.iter().filter_map(|r| r.response_hours()).collect();
    if hours.is_empty() {
        return 0.0;
    }
    round1(hours.iter().sum::<f64>() / hours.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaintenanceCategory, Priority, RecordStatus};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn record(received: Option<DateTime<Utc>>, responded: Option<DateTime<Utc>>) -> ServiceRecord {
        ServiceRecord {
            id: Uuid::new_v4(),
            vehicle_registration: "FLT-001".to_string(),
            depot_id: Uuid::new_v4(),
            received_at: received,
            responded_at: responded,
            status: RecordStatus::Closed,
            priority: Priority::Medium,
            category: MaintenanceCategory::Maintenance,
            description: "servicio".to_string(),
            response: None,
            odometer_km: None,
        }
    }

    #[test]
    fn test_average_over_eligible_records_only() {
        // 5 registros, solo 2 con ambos timestamps (3h y 5h): media 4.0
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        let records = vec![
            record(Some(base), Some(base + Duration::hours(3))),
            record(Some(base), Some(base + Duration::hours(5))),
            record(Some(base), None),
            record(None, None),
            record(None, Some(base)),
        ];

        assert_eq!(average_response_hours(&records), 4.0);
    }

    #[test]
    fn test_no_eligible_records_returns_zero() {
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        let records = vec![record(Some(base), None), record(None, None)];

        assert_eq!(average_response_hours(&records), 0.0);
        assert_eq!(average_response_hours(&[]), 0.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        let records = vec![
            record(Some(base), Some(base + Duration::minutes(90))),
            record(Some(base), Some(base + Duration::minutes(100))),
        ];

        // (1.5h + 1.666h) / 2 = 1.583 -> 1.6
        assert_eq!(average_response_hours(&records), 1.6);
    }
}
