//! IPC DTO helpers
//!
//! Keeps wire representations checkable with plain `cargo test`.

use serde::Serialize;

/// Serializes a serde value expected to become a JSON string.
///
/// This is primarily used for enums with `#[serde(rename_all = ...)]` where
/// `Debug` formatting is not a stable wire format.
pub fn serialize_to_json_string<T: Serialize>(value: &T) -> Result<String, String> {
    let json_value = serde_json::to_value(value).map_err(|e| e.to_string())?;
    json_value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| "Expected value to serialize as a JSON string".to_string())
}
