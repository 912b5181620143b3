//! `ipgeolocation parse-user-agent` and `ipgeolocation parse-bulk-user-agents`.
//!
//! User-Agent strings go in the JSON body, not the query string.
//! Each `--user-agents` value is read as one CSV record, so a User-Agent
//! that itself contains commas must be quoted:
//!
//!   ipgeolocation parse-bulk-user-agents --user-agents '"Mozilla/5.0 (KHTML, like Gecko)",curl/7.64.1'
//!   ipgeolocation parse-bulk-user-agents --user-agents curl/7.64.1 --user-agents Wget/1.21

use clap::Args;
use serde_json::json;

use crate::api::ApiRequest;
use crate::errors::{IpGeoError, Result};

#[derive(Args, Debug, Default)]
pub struct ParseUserAgentArgs {
    /// User-Agent string to parse
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

#[derive(Args, Debug, Default)]
pub struct ParseBulkUserAgentsArgs {
    /// User-Agent strings to parse (comma-separated, CSV quoting allowed)
    #[arg(long = "user-agents", num_args = 1..)]
    pub user_agents: Vec<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

/// Build the `/user-agent` request.
pub fn build_request(args: &ParseUserAgentArgs) -> Result<ApiRequest> {
    let ua = args
        .user_agent
        .as_deref()
        .filter(|ua| !ua.is_empty())
        .ok_or_else(|| {
            IpGeoError::CommandFailed(
                "Please provide a user agent string using --user-agent".into(),
            )
        })?;

    Ok(ApiRequest::post("/user-agent", json!({ "uaString": ua })))
}

/// Build the `/user-agent-bulk` request.
pub fn build_bulk_request(args: &ParseBulkUserAgentsArgs) -> Result<ApiRequest> {
    let user_agents = split_csv_values(&args.user_agents)?;
    if user_agents.is_empty() {
        return Err(IpGeoError::CommandFailed(
            "Please provide at least one user agent.".into(),
        ));
    }

    Ok(ApiRequest::post(
        "/user-agent-bulk",
        json!({ "uaStrings": user_agents }),
    ))
}

/// Split every value as a single CSV record and concatenate the fields.
///
/// Quoted fields keep their commas; empty values contribute nothing.
pub fn split_csv_values(values: &[String]) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    for value in values.iter().filter(|v| !v.is_empty()) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(value.as_bytes());

        if let Some(record) = reader.records().next() {
            let record = record.map_err(|e| {
                IpGeoError::CommandFailed(format!("Invalid --user-agents value {value:?}: {e}"))
            })?;
            fields.extend(record.iter().map(str::to_string));
        }
    }
    Ok(fields)
}

/// Execute the `parse-user-agent` command.
pub fn execute(args: &ParseUserAgentArgs) -> Result<()> {
    let request = build_request(args)?;
    crate::cli::run_request(&request, &args.output)?;
    Ok(())
}

/// Execute the `parse-bulk-user-agents` command.
pub fn execute_bulk(args: &ParseBulkUserAgentsArgs) -> Result<()> {
    let request = build_bulk_request(args)?;
    crate::cli::run_request(&request, &args.output)?;
    Ok(())
}
