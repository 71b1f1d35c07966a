//! Logging initialization for the `podium` CLI.
//!
//! Diagnostics go to stderr so stdout stays clean for piped output.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `-v` counts raise the level (warn → info → debug → trace) and `-q` caps
/// it at errors; an explicit `RUST_LOG` overrides both.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())
}
