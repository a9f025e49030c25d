//! Validation of the options object driving a documentation build.
//!
//! The options arrive as an untyped JSON record. Validation is a chain of
//! checks that stops at the first failure; on success the very same value
//! is handed back.

use crate::error::OptionsError;
use serde_json::{Map, Value};

const DEFINITION_KEYS: [&str; 2] = ["swaggerDefinition", "definition"];

/// Validate `options`, returning it unchanged.
pub fn validate_options(options: Option<&Value>) -> Result<&Value, OptionsError> {
    let options = options.ok_or(OptionsError::MissingOptions)?;
    let (key, definition) = definition_of(options)?;

    let info = definition
        .get("info")
        .and_then(Value::as_object)
        .ok_or(OptionsError::MissingInfo { key })?;

    if !non_empty_str(info, "title") || !non_empty_str(info, "version") {
        return Err(OptionsError::InvalidInfo { key });
    }

    if !options.get("apis").is_some_and(Value::is_array) {
        return Err(OptionsError::MissingApis);
    }

    Ok(options)
}

/// Exactly one definition key must hold an object.
fn definition_of(options: &Value) -> Result<(&'static str, &Map<String, Value>), OptionsError> {
    let mut present = DEFINITION_KEYS
        .iter()
        .filter_map(|&key| options.get(key).and_then(Value::as_object).map(|d| (key, d)));

    match (present.next(), present.next()) {
        (Some(found), None) => Ok(found),
        _ => Err(OptionsError::MissingDefinition),
    }
}

fn non_empty_str(info: &Map<String, Value>, field: &str) -> bool {
    info.get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// True if any property of `obj` is an empty object or an empty array.
pub fn has_empty_property(obj: &Value) -> bool {
    obj.as_object().is_some_and(|map| {
        map.values().any(|v| match v {
            Value::Object(m) => m.is_empty(),
            Value::Array(a) => a.is_empty(),
            _ => false,
        })
    })
}

/// Read-only view over an options value that passed [`validate_options`].
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    raw: &'a Value,
    key: &'static str,
}

impl<'a> Options<'a> {
    pub fn new(options: &'a Value) -> Result<Self, OptionsError> {
        let raw = validate_options(Some(options))?;
        let (key, _) = definition_of(raw)?;
        Ok(Self { raw, key })
    }

    /// `swaggerDefinition` or `definition`, whichever was supplied.
    pub fn definition_key(&self) -> &'static str {
        self.key
    }

    pub fn definition(&self) -> &'a Value {
        let raw: &'a Value = self.raw;
        &raw[self.key]
    }

    /// String entries of `apis`; other entries are skipped.
    pub fn apis(&self) -> Vec<&'a str> {
        let raw: &'a Value = self.raw;
        raw["apis"]
            .as_array()
            .map(|a| a.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }
}
