//! Typed lookups into a JSON parameter object.
//!
//! Engines take their configuration as a `serde_json::Value` so the CLI, the
//! browser host and recipe files can all pass the same thing. The lenient
//! helpers fall back to the default on a missing key or wrong type;
//! [`expect_number`] is the strict variant used when validating user input.

use crate::error::EngineError;
use serde_json::Value;

/// `params[name]` as `f64`, or `default` if missing or not a number.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// `params[name]` as `f64`, clamped to `[min, max]`.
///
/// Non-finite input is treated as missing.
pub fn param_f64_clamped(params: &Value, name: &str, default: f64, min: f64, max: f64) -> f64 {
    let v = param_f64(params, name, default);
    if v.is_finite() {
        v.clamp(min, max)
    } else {
        default
    }
}

/// `params[name]` as `usize`, clamped to `[min, max]`.
///
/// Integers too large for `usize` clamp to `max`. Negative, fractional or
/// missing values give `default`.
pub fn param_usize_clamped(
    params: &Value,
    name: &str,
    default: usize,
    min: usize,
    max: usize,
) -> usize {
    match params.get(name).and_then(Value::as_u64) {
        Some(v) => usize::try_from(v).unwrap_or(usize::MAX).clamp(min, max),
        None => default,
    }
}

/// `params[name]` as `u32`, clamped to `[min, max]`.
pub fn param_u32_clamped(params: &Value, name: &str, default: u32, min: u32, max: u32) -> u32 {
    match params.get(name).and_then(Value::as_u64) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX).clamp(min, max),
        None => default,
    }
}

/// Errors if `params[name]` is present but not a JSON number.
pub fn expect_number(params: &Value, name: &str) -> Result<(), EngineError> {
    match params.get(name) {
        None | Some(Value::Number(_)) => Ok(()),
        Some(other) => Err(EngineError::ParamTypeMismatch {
            name: name.to_owned(),
            expected: "number".to_owned(),
            got: json_type_name(other).to_owned(),
        }),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
