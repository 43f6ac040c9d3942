use serde_json::{Map, Value};

use crate::error::{NewickVizError, Result};
use crate::model::{RenderConfig, REQUIRED_KEYS};

/// Validate a raw configuration mapping into a [`RenderConfig`].
///
/// All missing keys are reported together. Pass-through values are taken
/// as they are; the branch lengths are then checked in declaration order and
/// the first one that cannot be coerced is reported.
pub fn parse_render_config(map: &Map<String, Value>) -> Result<RenderConfig> {
    let missing: Vec<&'static str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(NewickVizError::MissingConfigKeys(missing));
    }

    Ok(RenderConfig {
        padding: field(map, "padding")?.clone(),
        opacity: field(map, "opacity")?.clone(),
        points: field(map, "points")?.clone(),
        distance_threshold: field(map, "distance_threshold")?.clone(),
        show_confidence: truthy(field(map, "show_confidence")?),
        font_size: field(map, "font_size")?.clone(),
        font_family: field(map, "font_family")?.clone(),
        font_weight: field(map, "font_weight")?.clone(),
        min_branch_length: parse_float(map, "min_branch_length")?,
        max_branch_length: parse_float(map, "max_branch_length")?,
        default_length: parse_float(map, "default_length")?,
    })
}

fn field<'a>(map: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    map.get(key)
        .ok_or_else(|| NewickVizError::MissingConfigKeys(vec![key]))
}

fn invalid(key: &'static str, reason: impl Into<String>) -> NewickVizError {
    NewickVizError::InvalidConfigValue { key, reason: reason.into() }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A number, numeric string, or boolean coerced to f64.
/// Non-finite values have no JSON form and are rejected.
fn parse_float(map: &Map<String, Value>, key: &'static str) -> Result<f64> {
    let value = match field(map, key)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(key, format!("{} is not representable as a float", n)))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(key, format!("'{}' is not a number", s)))?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        other => return Err(invalid(key, format!("expected a number, got {}", describe(other)))),
    };

    check_finite(key, value)
}

pub(crate) fn check_finite(key: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(key, format!("{} is not finite", value)))
    }
}

/// Empty and zero values are false, everything else is true
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
