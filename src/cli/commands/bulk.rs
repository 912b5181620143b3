//! Helpers shared by the bulk IP commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cli::output;
use crate::errors::{IpGeoError, Result};
use crate::render;

/// Read IPs from a text file, one per line.  Lines are trimmed and blank
/// lines are skipped.
pub fn read_ip_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        IpGeoError::CommandFailed(format!("Error opening file {}: {e}", path.display()))
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// IPs from `--ips` followed by those from `--file`.  At least one is required.
pub fn collect_ips(ips: &[String], file: Option<&str>) -> Result<Vec<String>> {
    let mut all = ips.to_vec();
    if let Some(path) = file {
        all.extend(read_ip_file(Path::new(path))?);
    }

    if all.is_empty() {
        return Err(IpGeoError::CommandFailed(
            "Please provide at least one IP address using --ips or --file.".into(),
        ));
    }
    Ok(all)
}

/// Write `value` as pretty JSON to `<name>.json` and report where it went.
pub fn save_output_file(name: &str, value: &Value) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{name}.json"));
    let json = render::to_pretty_json(value)?;

    fs::write(&path, json).map_err(|e| {
        IpGeoError::CommandFailed(format!("Error writing JSON to {}: {e}", path.display()))
    })?;

    output::success(&format!("Output saved to file: {}", path.display()));
    Ok(path)
}
