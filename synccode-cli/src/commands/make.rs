use anyhow::{Context, Result};
use serde_json::{Number, Value};
use synccode_core::{SyncCodeError, SyncCodeParts, SyncCodeValidator};
use tracing::info;

use super::read_input;

/// Build a code from a JSON record `{"series", "device", "identifier"}`
///
/// Anything other than a JSON object is rejected as missing parts, the
/// same as a record with absent or falsy fields (`null`, `false`, `0`,
/// `""`). Every other scalar is rendered as text and left for validation
/// to classify.
pub fn make_from_json(validator: &SyncCodeValidator, json: &str) -> Result<String> {
    let value: Value =
        serde_json::from_str(json).with_context(|| "Failed to parse sync code parts")?;

    let Value::Object(record) = value else {
        return Err(SyncCodeError::MissingParts.into());
    };

    let parts = SyncCodeParts {
        series: part_text(record.get("series")),
        device: part_text(record.get("device")),
        identifier: part_text(record.get("identifier")).map(Into::into),
    };

    Ok(validator.make(&parts)?)
}

/// Text of one JSON field, or `None` if it is absent or falsy
fn part_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => number_text(n),
        other => Some(other.to_string()),
    }
}

/// Plain decimal rendering of a JSON number; zero is falsy
fn number_text(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }

    let f = n.as_f64()?;
    if f == 0.0 {
        None
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

/// Build a code from flags or a JSON parts file and print it
pub fn execute(
    validator: &SyncCodeValidator,
    series: Option<String>,
    device: Option<String>,
    identifier: Option<String>,
    input: Option<&str>,
) -> Result<String> {
    let code = match input {
        Some(input) => {
            info!("Reading sync code parts from {}", input);
            make_from_json(validator, &read_input(input)?)?
        }
        None => validator.make(&SyncCodeParts {
            series,
            device,
            identifier: identifier.map(Into::into),
        })?,
    };

    println!("{}", code);
    Ok(code)
}
