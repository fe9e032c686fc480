//! Validation pipeline for submitted form data.
//!
//! Runs every field's validator over a raw content mapping and either
//! returns the cleaned mapping or one aggregate report carrying every
//! failure. The pipeline never stops at the first failure: all fields
//! are attempted so the full set of problems surfaces in one pass.

use serde_json::{Map, Value};

use elicit_core::logging::targets;
use elicit_core::ValidationReport;

use crate::registry::FieldSet;

/// Validates a raw content mapping against a field set.
///
/// For every declared field, in declaration order, the corresponding raw
/// value is looked up (a missing key validates as `null`) and cleaned by
/// that field's validator. Successes collect into the returned mapping,
/// which preserves declaration order; failures collect into a
/// [`ValidationReport`] keyed by field name. Extra keys in the raw
/// mapping that correspond to no declared field are ignored.
pub fn validate_all(
    fields: &FieldSet,
    raw: &Map<String, Value>,
) -> Result<Map<String, Value>, ValidationReport> {
    let mut cleaned = Map::new();
    let mut report = ValidationReport::new();

    for (name, field) in fields.iter() {
        let value = raw.get(name).unwrap_or(&Value::Null);
        match field.validate(value) {
            Ok(clean) => {
                cleaned.insert(name.to_string(), clean);
            }
            Err(error) => report.push(name, error),
        }
    }

    if report.is_empty() {
        Ok(cleaned)
    } else {
        log::debug!(
            target: targets::VALIDATE,
            "validation rejected {} of {} fields: {report}",
            report.len(),
            fields.len()
        );
        Err(report)
    }
}
