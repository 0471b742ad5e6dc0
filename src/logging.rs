//! Diagnostic logging
//!
//! Events go to stderr so stdout only ever carries search results.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `TAGC_LOG=tagc=debug`
pub const LOG_ENV: &str = "TAGC_LOG";

/// Install the global subscriber. `TAGC_LOG` wins over the `-v` count.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .try_init()
        .ok();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
