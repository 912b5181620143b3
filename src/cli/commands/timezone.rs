//! `ipgeolocation timezone` and `ipgeolocation time-conversion`.
//!
//! Usage:
//!   ipgeolocation timezone --location "New York"
//!   ipgeolocation timezone --latitude 37.7749 --longitude -122.4194
//!   ipgeolocation time-conversion --tz_from America/New_York --tz_to Asia/Tokyo
//!
//! Coordinates are only sent when given, formatted with six decimals.

use clap::Args;

use crate::api::ApiRequest;
use crate::errors::Result;

#[derive(Args, Debug, Default)]
pub struct TimezoneArgs {
    /// IPv4 or IPv6 address (e.g. 8.8.8.8)
    #[arg(long)]
    pub ip: Option<String>,

    /// Timezone name (e.g. America/New_York)
    #[arg(long)]
    pub tz: Option<String>,

    /// Location name (e.g. New York)
    #[arg(long)]
    pub location: Option<String>,

    /// Latitude (e.g. 37.7749)
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude (e.g. -122.4194)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// IATA airport code (e.g. DXB)
    #[arg(long)]
    pub iata: Option<String>,

    /// ICAO airport code (e.g. KATL)
    #[arg(long)]
    pub icao: Option<String>,

    /// UN/LOCODE (e.g. DEBER)
    #[arg(long)]
    pub lo: Option<String>,

    /// Language code (e.g. en)
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

#[derive(Args, Debug, Default)]
pub struct TimeConversionArgs {
    /// Source timezone
    #[arg(long = "tz_from")]
    pub tz_from: Option<String>,

    /// Target timezone
    #[arg(long = "tz_to")]
    pub tz_to: Option<String>,

    /// Source location name
    #[arg(long = "location_from")]
    pub location_from: Option<String>,

    /// Target location name
    #[arg(long = "location_to")]
    pub location_to: Option<String>,

    /// Source latitude
    #[arg(long = "lat_from", allow_negative_numbers = true)]
    pub lat_from: Option<f64>,

    /// Source longitude
    #[arg(long = "long_from", allow_negative_numbers = true)]
    pub long_from: Option<f64>,

    /// Target latitude
    #[arg(long = "lat_to", allow_negative_numbers = true)]
    pub lat_to: Option<f64>,

    /// Target longitude
    #[arg(long = "long_to", allow_negative_numbers = true)]
    pub long_to: Option<f64>,

    /// Source IATA code
    #[arg(long = "iata_from")]
    pub iata_from: Option<String>,

    /// Target IATA code
    #[arg(long = "iata_to")]
    pub iata_to: Option<String>,

    /// Source ICAO code
    #[arg(long = "icao_from")]
    pub icao_from: Option<String>,

    /// Target ICAO code
    #[arg(long = "icao_to")]
    pub icao_to: Option<String>,

    /// Source UN/LOCODE
    #[arg(long = "lo_from")]
    pub lo_from: Option<String>,

    /// Target UN/LOCODE
    #[arg(long = "lo_to")]
    pub lo_to: Option<String>,

    /// Time to convert (e.g. "2025-08-07 15:00:00"); defaults to now
    #[arg(long)]
    pub time: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

/// Build the `/timezone` request.
pub fn build_request(args: &TimezoneArgs) -> ApiRequest {
    ApiRequest::get("/timezone")
        .param("ip", args.ip.as_deref())
        .param("iata_code", args.iata.as_deref())
        .param("icao_code", args.icao.as_deref())
        .param("lo_code", args.lo.as_deref())
        .param("lang", args.lang.as_deref())
        .param("tz", args.tz.as_deref())
        .param("location", args.location.as_deref())
        .float("lat", args.latitude)
        .float("long", args.longitude)
}

/// Build the `/timezone/convert` request.
pub fn build_conversion_request(args: &TimeConversionArgs) -> ApiRequest {
    ApiRequest::get("/timezone/convert")
        .param("tz_from", args.tz_from.as_deref())
        .param("tz_to", args.tz_to.as_deref())
        .param("location_from", args.location_from.as_deref())
        .param("location_to", args.location_to.as_deref())
        .float("lat_from", args.lat_from)
        .float("long_from", args.long_from)
        .float("lat_to", args.lat_to)
        .float("long_to", args.long_to)
        .param("iata_from", args.iata_from.as_deref())
        .param("iata_to", args.iata_to.as_deref())
        .param("icao_from", args.icao_from.as_deref())
        .param("icao_to", args.icao_to.as_deref())
        .param("locode_from", args.lo_from.as_deref())
        .param("locode_to", args.lo_to.as_deref())
        .param("time", args.time.as_deref())
}

/// Execute the `timezone` command.
pub fn execute(args: &TimezoneArgs) -> Result<()> {
    crate::cli::run_request(&build_request(args), &args.output)?;
    Ok(())
}

/// Execute the `time-conversion` command.
pub fn execute_conversion(args: &TimeConversionArgs) -> Result<()> {
    crate::cli::run_request(&build_conversion_request(args), &args.output)?;
    Ok(())
}
