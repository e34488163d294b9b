//! Diagnostic logging.
//!
//! Diagnostics go to stderr so they never mix with narration on stdout.

use outpost_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OUTPOST_LOG";

const DEFAULT_FILTER: &str = "warn";
const TRACE_FILTER: &str = "debug";

/// Picks the filter directive: `--trace` wins, then the environment, then
/// the default.
#[must_use]
pub fn filter_directive(trace: bool, env: Option<&str>) -> String {
    if trace {
        return TRACE_FILTER.to_string();
    }
    env.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns a configuration error if the filter does not parse or a
/// subscriber is already installed.
pub fn init_logging(trace: bool) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(trace, env.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::config(format!("invalid log filter {directive:?}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::config(e.to_string()))
}
