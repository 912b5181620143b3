//! One module per subcommand.

pub mod abuse;
pub mod asn;
pub mod astronomy;
pub mod bulk;
pub mod completions;
pub mod config;
pub mod ipgeo;
pub mod security;
pub mod timezone;
pub mod user_agent;
