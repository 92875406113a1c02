//! Language file parsers.
//!
//! - `json`: structured `en_us.json` files (1.13+)
//! - `lang`: legacy `en_US.lang` `key=value` files

pub mod json;
pub mod lang;

use anyhow::Result;

use crate::core::{RawMessages, format::SourceFormat};

/// Parse one language file according to `format`.
pub fn parse_messages(format: SourceFormat, content: &str, file_path: &str) -> Result<RawMessages> {
    match format {
        SourceFormat::Json => json::parse_json_messages(content, file_path),
        SourceFormat::Lang => Ok(lang::parse_lang_messages(content)),
    }
}
