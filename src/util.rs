//! Typed extraction from dynamic engine values.
//!
//! The engine's report is untyped data from a script engine. These helpers
//! pull typed values out of a `serde_json::Value` "scope", degrading to a
//! default when a field is absent or carries the wrong shape instead of
//! failing the whole run.

use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use std::io::Read;

/// Fetch an integer field from a dynamic scope.
///
/// Returns 0 when the scope is not an object, the field is absent, or the
/// value is not numeric. Floating-point values truncate.
pub fn int_value(scope: &Json, name: &str) -> i64 {
    match scope.get(name) {
        Some(Json::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Fetch a string field from a dynamic scope, or `None` when absent or
/// not a string.
pub fn string_value(scope: &Json, name: &str) -> Option<String> {
    scope.get(name).and_then(Json::as_str).map(str::to_owned)
}

/// Fetch a boolean field from a dynamic scope, defaulting to `false`.
pub fn bool_value(scope: &Json, name: &str) -> bool {
    scope.get(name).and_then(Json::as_bool).unwrap_or(false)
}

/// Fetch a homogeneous list field from a dynamic scope.
///
/// Absent or non-array values yield an empty list; elements that fail to
/// decode as `T` are dropped rather than aborting the extraction.
pub fn list_value<T: DeserializeOwned>(scope: &Json, name: &str) -> Vec<T> {
    match scope.get(name) {
        Some(Json::Array(items)) => items
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Drain a reader into a string.
pub fn reader_to_string<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
