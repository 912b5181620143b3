//! `ipgeolocation ip-security` and `ipgeolocation bulk-ip-security`.
//!
//! Proxy, VPN and Tor detection, threat scores and related data.

use clap::Args;
use serde_json::json;

use super::bulk;
use crate::api::ApiRequest;
use crate::errors::Result;

#[derive(Args, Debug, Default)]
pub struct IpSecurityArgs {
    /// IPv4 or IPv6 address (defaults to your own IP)
    #[arg(long)]
    pub ip: Option<String>,

    /// Additional modules to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Fields to exclude from the output (comma-separated)
    #[arg(long, visible_alias = "excludes", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Only return these fields (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Language for the output
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

#[derive(Args, Debug, Default)]
pub struct BulkIpSecurityArgs {
    /// Comma-separated list of IPs
    #[arg(long, value_delimiter = ',')]
    pub ips: Vec<String>,

    /// Path to a text file containing IPs (one per line)
    #[arg(long)]
    pub file: Option<String>,

    /// Additional modules to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Fields to exclude from the output (comma-separated)
    #[arg(long, visible_alias = "excludes", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Only return these fields (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Language for the output
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,

    /// Also save the result as pretty JSON to <NAME>.json
    #[arg(long)]
    pub output_file: Option<String>,
}

/// Build the `/security` request.
pub fn build_request(args: &IpSecurityArgs) -> ApiRequest {
    ApiRequest::get("/security")
        .param("ip", args.ip.as_deref())
        .list("include", &args.include)
        .list("excludes", &args.exclude)
        .list("fields", &args.fields)
        .param("lang", args.lang.as_deref())
}

/// Build the `/security-bulk` request from already collected IPs.
pub fn build_bulk_request(args: &BulkIpSecurityArgs, ips: &[String]) -> ApiRequest {
    ApiRequest::post("/security-bulk", json!({ "ips": ips }))
        .list("include", &args.include)
        .list("excludes", &args.exclude)
        .list("fields", &args.fields)
        .param("lang", args.lang.as_deref())
}

/// Execute the `ip-security` command.
pub fn execute(args: &IpSecurityArgs) -> Result<()> {
    crate::cli::run_request(&build_request(args), &args.output)?;
    Ok(())
}

/// Execute the `bulk-ip-security` command.
pub fn execute_bulk(args: &BulkIpSecurityArgs) -> Result<()> {
    let ips = bulk::collect_ips(&args.ips, args.file.as_deref())?;
    let response = crate::cli::run_request(&build_bulk_request(args, &ips), &args.output)?;

    if let Some(name) = &args.output_file {
        bulk::save_output_file(name, &response.value)?;
    }
    Ok(())
}
