//! Servicio de categorización por keywords
//!
//! Atribuye un registro histórico a cero-o-una regla de intervalo buscando las
//! keywords de cada regla como substring (case-insensitive) en la descripción
//! y la respuesta. El empate se resuelve por orden de lista: gana la primera
//! regla que coincide, por eso el llamador ordena las reglas de más específica
//! a menos específica.

use crate::models::{IntervalRule, ServiceRecord};

/// Devuelve la primera regla cuyas keywords aparecen en el registro, o `None`
pub fn categorize<'r>(
    record: &ServiceRecord,
    rules: &'r [IntervalRule],
) -> Option<&'r IntervalRule> {
    let description = record.description.to_lowercase();
    let response = record
        .response
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    rules.iter().find(|rule| {
        rule.keywords.iter().any(|keyword| {
            let kw = keyword.to_lowercase();
            description.contains(&kw) || response.contains(&kw)
        })
    })
}

/// Pre-etiqueta una colección: cada registro con el índice de su regla, si hay
pub fn tag_records<'a>(
    records: &'a [ServiceRecord],
    rules: &[IntervalRule],
) -> Vec<(&'a ServiceRecord, Option<usize>)> {
    records
        .iter()
        .map(|record| {
            let tag = categorize(record, rules)
                .and_then(|matched| rules.iter().position(|r| r.name == matched.name));
            (record, tag)
        })
        .collect()
}
