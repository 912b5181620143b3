//! Output formatting for API responses.
//!
//! Supported formats:
//! - `pretty` / `json` (default): 2-space indented JSON
//! - `raw`: the response body exactly as received
//! - `table`: indented key/value listing (see `table`)
//! - `yaml`: YAML serialization of the same tree

pub mod table;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::{IpGeoError, Result};

pub use table::{render_table, title_case, MAX_TABLE_DEPTH};

/// How a response is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Raw,
    Table,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = IpGeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "" | "pretty" | "json" => Ok(Self::Pretty),
            "raw" => Ok(Self::Raw),
            "table" => Ok(Self::Table),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(IpGeoError::CommandFailed(format!(
                "unknown output format '{other}'. Use pretty, raw, table, or yaml"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Raw => "raw",
            Self::Table => "table",
            Self::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Render a decoded response in `format`.
///
/// `raw` must be the body bytes the value was decoded from; only
/// `OutputFormat::Raw` uses them.  The result ends with a newline unless
/// it is empty.
pub fn render(value: &Value, raw: &[u8], format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Raw => String::from_utf8_lossy(raw).into_owned(),
        OutputFormat::Pretty => to_pretty_json(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| IpGeoError::Serialization(format!("YAML: {e}")))?,
        OutputFormat::Table => render_table(value, 0)?,
    };

    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// 2-space indented JSON.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| IpGeoError::Serialization(format!("JSON: {e}")))
}
