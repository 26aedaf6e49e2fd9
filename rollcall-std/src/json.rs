//! JSON configuration ingestion.
//!
//! Objects become maps with named keys, arrays become lists keyed by
//! position, so a top-level JSON array yields a configuration with positional
//! keys that the checker will reject. So does an object key such as `"1"`,
//! which converts to a position. Key order of objects is preserved.

use rollcall_core::{Configuration, InvalidEventConfigurationFormat, Value};
use thiserror::Error;

/// Errors that can occur while reading a JSON configuration.
#[derive(Error, Debug)]
pub enum JsonConfigError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is not a map of events.
    #[error(transparent)]
    Format(#[from] InvalidEventConfigurationFormat),
}

/// Converts a JSON document into a [`Value`].
pub fn value_from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, value_from_json(value)))
                .collect(),
        ),
    }
}

/// Converts a JSON document into a [`Configuration`].
pub fn configuration_from_json(
    json: serde_json::Value,
) -> Result<Configuration, InvalidEventConfigurationFormat> {
    Configuration::try_from(value_from_json(json))
}

/// Parses JSON text into a [`Configuration`].
pub fn configuration_from_str(text: &str) -> Result<Configuration, JsonConfigError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(configuration_from_json(json)?)
}
