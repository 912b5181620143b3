//! `ipgeolocation abuse` — abuse contact information for an IP address.

use clap::Args;

use crate::api::ApiRequest;
use crate::errors::Result;

#[derive(Args, Debug, Default)]
pub struct AbuseArgs {
    /// IPv4 or IPv6 address
    #[arg(long)]
    pub ip: Option<String>,

    /// Fields to exclude from the output (comma-separated)
    #[arg(long, visible_alias = "excludes", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Only return these fields (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

/// Build the `/abuse` request.
pub fn build_request(args: &AbuseArgs) -> ApiRequest {
    ApiRequest::get("/abuse")
        .param("ip", args.ip.as_deref())
        .list("excludes", &args.exclude)
        .list("fields", &args.fields)
}

/// Execute the `abuse` command.
pub fn execute(args: &AbuseArgs) -> Result<()> {
    crate::cli::run_request(&build_request(args), &args.output)?;
    Ok(())
}
