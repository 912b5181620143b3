//! `ipgeolocation astronomy` and `ipgeolocation astronomy-timeseries`.
//!
//! Sunrise, sunset, solar noon, moonrise, moonset, moon phase and day
//! length for a location, either for one day or over a date range.

use clap::Args;

use crate::api::ApiRequest;
use crate::errors::{IpGeoError, Result};

#[derive(Args, Debug, Default)]
pub struct AstronomyArgs {
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

    /// Language code (e.g. en)
    #[arg(long)]
    pub lang: Option<String>,

    /// Elevation in meters (e.g. 1000)
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

#[derive(Args, Debug, Default)]
pub struct AstronomyTimeseriesArgs {
    /// IPv4 or IPv6 address (e.g. 8.8.8.8)
    #[arg(long)]
    pub ip: Option<String>,

    /// Location name (e.g. New York)
    #[arg(long)]
    pub location: Option<String>,

    /// Start date (e.g. 2025-08-01)
    #[arg(short = 's', long = "start-date")]
    pub start_date: Option<String>,

    /// End date (e.g. 2025-08-07)
    #[arg(short = 'e', long = "end-date")]
    pub end_date: Option<String>,

    /// Latitude (e.g. 37.7749)
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude (e.g. -122.4194)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Language code (e.g. en)
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format: pretty, raw, table, yaml
    #[arg(short, long, default_value = "pretty")]
    pub output: String,
}

/// Build the `/astronomy` request.
pub fn build_request(args: &AstronomyArgs) -> ApiRequest {
    ApiRequest::get("/astronomy")
        .param("ip", args.ip.as_deref())
        .param("time_zone", args.tz.as_deref())
        .param("lang", args.lang.as_deref())
        .param("location", args.location.as_deref())
        .float("lat", args.latitude)
        .float("long", args.longitude)
        .float("elevation", args.elevation)
}

/// Build the `/astronomy/timeSeries` request.  Both dates are required.
pub fn build_timeseries_request(args: &AstronomyTimeseriesArgs) -> Result<ApiRequest> {
    let (Some(start), Some(end)) = (
        args.start_date.as_deref().filter(|d| !d.is_empty()),
        args.end_date.as_deref().filter(|d| !d.is_empty()),
    ) else {
        return Err(IpGeoError::CommandFailed(
            "Please provide both start and end dates.".into(),
        ));
    };

    Ok(ApiRequest::get("/astronomy/timeSeries")
        .param("dateStart", Some(start))
        .param("dateEnd", Some(end))
        .param("ip", args.ip.as_deref())
        .param("lang", args.lang.as_deref())
        .param("location", args.location.as_deref())
        .float("lat", args.latitude)
        .float("long", args.longitude))
}

/// Execute the `astronomy` command.
pub fn execute(args: &AstronomyArgs) -> Result<()> {
    crate::cli::run_request(&build_request(args), &args.output)?;
    Ok(())
}

/// Execute the `astronomy-timeseries` command.
pub fn execute_timeseries(args: &AstronomyTimeseriesArgs) -> Result<()> {
    let request = build_timeseries_request(args)?;
    crate::cli::run_request(&request, &args.output)?;
    Ok(())
}
