//! Command-line front end for kinetrack.
//!
//! The binaries are thin wrappers; everything they do is reachable from here
//! so it can be driven from tests.

pub mod align;
pub mod cli;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the log subscriber. Logs go to stderr; stdout carries data.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
