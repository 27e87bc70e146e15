use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::path::get_by_path;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// JSON text returned on a miss; `null` when absent
    pub default: Option<String>,
    /// Print string leaves without JSON quotes
    pub raw: bool,
}

/// Resolves a dotted `path` in the JSON document `input`.
pub fn run(path: &str, input: &str, options: &GetOptions) -> Result<CmdResult> {
    let document: Value = serde_json::from_str(input)?;
    let default: Value = match &options.default {
        Some(text) => serde_json::from_str(text)?,
        None => Value::Null,
    };

    let mut result = CmdResult::default();
    let value = match get_by_path(path, &document) {
        Some(v) => v,
        None => {
            result.add_message(CmdMessage::warning(format!("No value at '{}'", path)));
            &default
        }
    };

    let rendered = match value {
        Value::String(s) if options.raw => s.clone(),
        other => serde_json::to_string(other)?,
    };
    Ok(result.with_values(vec![rendered]))
}
