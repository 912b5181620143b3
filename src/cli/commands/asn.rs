//! `ipgeolocation asn` — ASN details, peers, upstreams and downstreams.
//!
//! Usage:
//!   ipgeolocation asn --ip 8.8.8.8
//!   ipgeolocation asn --asn 12345 --include peers

use clap::Args;

use crate::api::ApiRequest;
use crate::errors::Result;

#[derive(Args, Debug, Default)]
pub struct AsnArgs {
    /// IPv4 or IPv6 address
    #[arg(long)]
    pub ip: Option<String>,

    /// ASN number (e.g. 8075)
    #[arg(long)]
    pub asn: Option<String>,

    /// Additional data to include (e.g. peers, upstreams)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

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

/// Build the `/asn` request.
pub fn build_request(args: &AsnArgs) -> ApiRequest {
    ApiRequest::get("/asn")
        .param("ip", args.ip.as_deref())
        .param("asn", args.asn.as_deref())
        .list("include", &args.include)
        .list("excludes", &args.exclude)
        .list("fields", &args.fields)
}

/// Execute the `asn` command.
pub fn execute(args: &AsnArgs) -> Result<()> {
    crate::cli::run_request(&build_request(args), &args.output)?;
    Ok(())
}
