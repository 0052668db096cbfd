//! Motor de agregación de tendencias
//!
//! Agrupa registros en buckets por periodo (diario, semanal ISO, mensual o
//! anual) con totales, desglose por categoría y prioridad media. Los registros
//! sin fecha de recepción quedan fuera de toda agregación: nunca se cuentan en
//! un bucket equivocado.

use crate::models::{MaintenanceCategory, ServiceRecord, TrendBucket, TrendPeriod};
use crate::utils::round1;
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

#[derive(Default)]
struct BucketAccumulator {
    total: usize,
    maintenance: usize,
    cleaning: usize,
    tires: usize,
    priority_sum: u32,
}

/// Clave de bucket para un timestamp según el periodo elegido.
/// Los formatos con cero a la izquierda ordenan lexicográficamente.
fn bucket_key(ts: DateTime<Utc>, period: TrendPeriod) -> String {
    match period {
        TrendPeriod::Daily => ts.date_naive().to_string(),
        TrendPeriod::Weekly => {
            let week = ts.iso_week();
            format!("{:04}-W{:02}", week.year(), week.week())
        }
        TrendPeriod::Monthly => format!("{:04}-{:02}", ts.year(), ts.month()),
        TrendPeriod::Yearly => format!("{:04}", ts.year()),
    }
}

/// Agrega la colección en buckets ordenados por clave ascendente
pub fn aggregate(records: &[ServiceRecord], period: TrendPeriod) -> Vec<TrendBucket> {
    let mut buckets: BTreeMap<String, BucketAccumulator> = BTreeMap::new();

    for record in records {
        let received = match record.received_at {
            Some(ts) => ts,
            None => continue,
        };

        let acc = buckets.entry(bucket_key(received, period)).or_default();
        acc.total += 1;
        acc.priority_sum += record.priority.code() as u32;
        match record.category {
            MaintenanceCategory::Maintenance => acc.maintenance += 1,
            MaintenanceCategory::Cleaning => acc.cleaning += 1,
            MaintenanceCategory::Tires => acc.tires += 1,
            MaintenanceCategory::Rental | MaintenanceCategory::Operation => {}
        }
    }

    buckets
        .into_iter()
        .map(|(key, acc)| TrendBucket {
            key,
            total: acc.total,
            maintenance_count: acc.maintenance,
            cleaning_count: acc.cleaning,
            tires_count: acc.tires,
            average_priority: round1(acc.priority_sum as f64 / acc.total as f64),
        })
        .collect()
}
