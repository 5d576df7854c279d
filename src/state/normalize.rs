//! Image reference normalization
//!
//! Turns any `ImageRef` into the address string handed to the image
//! widget. Total: unusable shapes resolve to an empty address, which
//! renders as an empty tile.

use serde_json::Value;

use super::data::{AssetRef, ImageRef};

/// Resolve a reference to a display-ready address
///
/// - `Address` is returned unchanged
/// - `Asset` prefers `address`, then `default`
/// - `Opaque` arrays are joined into text; every other opaque value gives ""
pub fn normalize(reference: &ImageRef) -> String {
    match reference {
        ImageRef::Missing => String::new(),
        ImageRef::Address(address) => address.clone(),
        ImageRef::Asset(AssetRef { address, default }) => address
            .as_ref()
            .or(default.as_ref())
            .cloned()
            .unwrap_or_default(),
        ImageRef::Opaque(value) => coerce(value),
    }
}

/// Generic string coercion for values that are neither strings nor objects
///
/// Only arrays produce text, their elements joined with commas. Bare
/// numbers and booleans are not usable addresses.
fn coerce(value: &Value) -> String {
    match value {
        Value::Array(values) => values.iter().map(element_text).collect::<Vec<_>>().join(","),
        _ => String::new(),
    }
}

fn element_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) => coerce(value),
        Value::Null | Value::Object(_) => String::new(),
    }
}
