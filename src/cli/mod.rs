//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use crate::api::{ApiClient, ApiRequest, ApiResponse};
use crate::config::{store, Settings};
use crate::errors::Result;
use crate::render::{self, OutputFormat};

use commands::abuse::AbuseArgs;
use commands::asn::AsnArgs;
use commands::astronomy::{AstronomyArgs, AstronomyTimeseriesArgs};
use commands::config::ConfigArgs;
use commands::ipgeo::{BulkIpgeoArgs, IpgeoArgs};
use commands::security::{BulkIpSecurityArgs, IpSecurityArgs};
use commands::timezone::{TimeConversionArgs, TimezoneArgs};
use commands::user_agent::{ParseBulkUserAgentsArgs, ParseUserAgentArgs};

/// ipgeolocation: command-line access to the ipgeolocation.io API.
#[derive(Parser)]
#[command(
    name = "ipgeolocation",
    about = "CLI for accessing IPGeolocation.io API endpoints",
    long_about = "CLI for accessing IPGeolocation.io API endpoints.\n\n\
                  Retrieve IP geolocation, security, ASN, abuse contact, timezone, \
                  astronomy and user-agent data from your terminal.\n\n\
                  Set your API key first with: ipgeolocation config --apikey=<your-key>",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Set or show the stored API key
    Config(ConfigArgs),

    /// Lookup IP geolocation information
    Ipgeo(IpgeoArgs),

    /// Lookup geolocation for many IPs in one request
    BulkIpGeo(BulkIpgeoArgs),

    /// Lookup IP security and threat intelligence information
    IpSecurity(IpSecurityArgs),

    /// Lookup security information for many IPs in one request
    BulkIpSecurity(BulkIpSecurityArgs),

    /// Lookup ASN information
    Asn(AsnArgs),

    /// Lookup abuse contact information for an IP address
    Abuse(AbuseArgs),

    /// Lookup timezone information
    Timezone(TimezoneArgs),

    /// Convert time between timezones or locations
    TimeConversion(TimeConversionArgs),

    /// Lookup sunrise, sunset, moon phase and related data
    Astronomy(AstronomyArgs),

    /// Lookup astronomy data over a date range
    AstronomyTimeseries(AstronomyTimeseriesArgs),

    /// Parse a User-Agent string
    ParseUserAgent(ParseUserAgentArgs),

    /// Parse multiple User-Agent strings in one request
    ParseBulkUserAgents(ParseBulkUserAgentsArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by the endpoint commands
// ---------------------------------------------------------------------------

/// Load the stored key, resolve settings and perform `request`.
pub fn fetch(request: &ApiRequest) -> Result<ApiResponse> {
    let api_key = store::load_api_key()?;
    let settings = Settings::resolve()?;
    ApiClient::new(&settings).fetch(&api_key, request)
}

/// Render `response` and write it to stdout in one piece.
pub fn print_response(response: &ApiResponse, format: OutputFormat) -> Result<()> {
    let text = render::render(&response.value, &response.raw, format)?;
    print!("{text}");
    Ok(())
}

/// Fetch and print.  The output format is checked before any network call.
pub fn run_request(request: &ApiRequest, output: &str) -> Result<ApiResponse> {
    let format: OutputFormat = output.parse()?;
    let response = fetch(request)?;
    print_response(&response, format)?;
    Ok(response)
}
