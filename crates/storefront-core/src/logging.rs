//! Tracing setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Stdout stays free for command output. `RUST_LOG` wins over the verbosity
/// flag when set. Calling this twice is harmless; the second install is
/// ignored.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
