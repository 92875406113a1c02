use serde_json::Value;

use crate::core::RawMessages;
use crate::utils::strip_bom;

/// Parse a legacy `.lang` file.
///
/// Blank lines and `#` comments are skipped. Each remaining line is split on
/// its first `=`, and both sides are trimmed. Lines without `=` are ignored.
pub fn parse_lang_messages(content: &str) -> RawMessages {
    let mut messages = RawMessages::new();

    for line in strip_bom(content).lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            messages.insert(
                key.trim().to_string(),
                Value::String(value.trim().to_string()),
            );
        }
    }

    messages
}
