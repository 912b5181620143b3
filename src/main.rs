use clap::Parser;
use ipgeolocation::cli::commands;
use ipgeolocation::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config(ref args) => commands::config::execute(args),
        Commands::Ipgeo(ref args) => commands::ipgeo::execute(args),
        Commands::BulkIpGeo(ref args) => commands::ipgeo::execute_bulk(args),
        Commands::IpSecurity(ref args) => commands::security::execute(args),
        Commands::BulkIpSecurity(ref args) => commands::security::execute_bulk(args),
        Commands::Asn(ref args) => commands::asn::execute(args),
        Commands::Abuse(ref args) => commands::abuse::execute(args),
        Commands::Timezone(ref args) => commands::timezone::execute(args),
        Commands::TimeConversion(ref args) => commands::timezone::execute_conversion(args),
        Commands::Astronomy(ref args) => commands::astronomy::execute(args),
        Commands::AstronomyTimeseries(ref args) => commands::astronomy::execute_timeseries(args),
        Commands::ParseUserAgent(ref args) => commands::user_agent::execute(args),
        Commands::ParseBulkUserAgents(ref args) => commands::user_agent::execute_bulk(args),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        ipgeolocation::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
