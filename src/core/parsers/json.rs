use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::RawMessages;
use crate::utils::strip_bom;

/// Parse a structured language file.
///
/// The root must be an object. Values are kept as-is, so a nested object or
/// array reaches reconciliation and is skipped there instead of failing the file.
pub fn parse_json_messages(content: &str, file_path: &str) -> Result<RawMessages> {
    let json: Value = serde_json::from_str(strip_bom(content))
        .with_context(|| format!("Failed to parse JSON file: {}", file_path))?;

    match json {
        Value::Object(map) => Ok(map),
        other => bail!(
            "Root of language file must be an object, found {}: {}",
            value_kind(&other),
            file_path
        ),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
