//! Indented key/value listing of an arbitrary JSON tree.
//!
//! ```text
//! Country Name        : Germany
//! Time Zone:
//!   Name                : CET
//!   Offset              : 1
//! ```

use std::fmt::Write;

use serde_json::Value;

use crate::errors::{IpGeoError, Result};

/// Deepest nesting, counted from the starting indent, the renderer descends to.
pub const MAX_TABLE_DEPTH: usize = 64;

/// Minimum width of a key column on a scalar line.
const KEY_WIDTH: usize = 20;

/// Render `value` as an indented table starting at `indent`.
///
/// The whole table is built before returning, so an error never leaves
/// partial output behind.
pub fn render_table(value: &Value, indent: usize) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: usize) -> Result<()> {
    if depth > MAX_TABLE_DEPTH {
        return Err(IpGeoError::DepthExceeded(MAX_TABLE_DEPTH));
    }
    let pad = "  ".repeat(indent);

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let title = title_case(key);
                if is_container(child) {
                    let _ = writeln!(out, "{pad}{title}:");
                    write_value(out, child, indent + 1, depth + 1)?;
                } else {
                    let _ = writeln!(out, "{pad}{title:<KEY_WIDTH$}: {}", scalar_text(child));
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{pad}[{i}]:");
                write_value(out, item, indent + 1, depth + 1)?;
            }
        }
        scalar => {
            let _ = writeln!(out, "{pad}{}", scalar_text(scalar));
        }
    }

    Ok(())
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Plain text of a scalar: strings unquoted, everything else as JSON.
///
/// Whole-valued floats drop their fraction: `1.0` prints as `1`.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// `"time_zone"` → `"Time Zone"`.
///
/// Splits on underscores, capitalizes the first character of each
/// non-empty segment and joins with single spaces.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
