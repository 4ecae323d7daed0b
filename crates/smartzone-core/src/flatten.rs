// ── Record flattening ──
//
// Turns one upstream JSON record into one sample per declared field.
// Pure: no I/O, no shared state. Every declared field is emitted, even
// when the record omits it.

use serde_json::Value;
use tracing::debug;

use crate::catalog::{FieldKind, FieldSpec, IdentityLabel, IdentitySource, ResourceFamily};
use crate::error::CoreError;
use crate::sample::Sample;

/// Values discovered by earlier stages that identity labels may refer to.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenContext<'a> {
    pub controller_id: Option<&'a str>,
}

impl<'a> FlattenContext<'a> {
    pub fn with_controller(controller_id: &'a str) -> Self {
        Self {
            controller_id: Some(controller_id),
        }
    }
}

/// Flatten `record` into samples, in catalog field order.
pub fn flatten(
    record: &Value,
    family: &ResourceFamily,
    ctx: &FlattenContext<'_>,
) -> Result<Vec<Sample>, CoreError> {
    if !record.is_object() {
        return Err(CoreError::SchemaMismatch {
            family: family.name,
            detail: "record is not a JSON object".into(),
        });
    }

    let identity = family
        .identity
        .iter()
        .map(|id| identity_value(record, family, id, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(family
        .fields
        .iter()
        .map(|spec| sample(record, family, spec, &identity))
        .collect())
}

fn identity_value(
    record: &Value,
    family: &ResourceFamily,
    id: &IdentityLabel,
    ctx: &FlattenContext<'_>,
) -> Result<String, CoreError> {
    match id.source {
        IdentitySource::Field(field) => match record.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(CoreError::SchemaMismatch {
                family: family.name,
                detail: format!("record has no `{field}` for label `{}`", id.label),
            }),
            Some(other) => Ok(other.to_string()),
        },
        IdentitySource::ControllerId => {
            ctx.controller_id
                .map(str::to_owned)
                .ok_or_else(|| CoreError::SchemaMismatch {
                    family: family.name,
                    detail: "no controller id available".into(),
                })
        }
    }
}

fn sample(record: &Value, family: &ResourceFamily, spec: &FieldSpec, identity: &[String]) -> Sample {
    let raw = lookup(record, spec);
    let mut labels = identity.to_vec();

    let value = match spec.kind {
        FieldKind::Numeric | FieldKind::NestedNumeric { .. } => numeric_or_nan(raw, family, spec),
        FieldKind::PortNumeric { port } => {
            labels.push(port.to_owned());
            numeric_or_nan(raw, family, spec)
        }
        FieldKind::BooleanAsNumeric { .. } => {
            labels.push(label_text(raw));
            numeric(raw).unwrap_or(1.0)
        }
        FieldKind::StringAsLabel { .. } => {
            labels.push(label_text(raw));
            1.0
        }
    };

    Sample {
        metric: spec.metric,
        labels,
        value,
    }
}

/// Raw field value; `None` when absent or null.
fn lookup<'v>(record: &'v Value, spec: &FieldSpec) -> Option<&'v Value> {
    let container = match spec.kind {
        FieldKind::NestedNumeric { parent } | FieldKind::PortNumeric { port: parent } => {
            record.get(parent)?
        }
        _ => record,
    };
    container.get(spec.field).filter(|v| !v.is_null())
}

/// Label text for a raw value. Strings verbatim, other JSON in its
/// serialized form, absent as `"0"`.
fn label_text(raw: Option<&Value>) -> String {
    match raw {
        None => "0".into(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric reading of a raw value, if it has one. Absent is 0.
fn numeric(raw: Option<&Value>) -> Option<f64> {
    match raw {
        None => Some(0.0),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => match s.trim() {
            "true" => Some(1.0),
            "false" => Some(0.0),
            other => other.parse().ok(),
        },
        Some(_) => None,
    }
}

fn numeric_or_nan(raw: Option<&Value>, family: &ResourceFamily, spec: &FieldSpec) -> f64 {
    numeric(raw).unwrap_or_else(|| {
        debug!(
            family = family.name,
            field = spec.field,
            "non-numeric value for numeric field, exporting NaN"
        );
        f64::NAN
    })
}
