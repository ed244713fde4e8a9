pub mod constants;
pub mod logging;
#[cfg(feature = "test")]
pub mod test_utils;

mod macros;

use chrono::{DateTime, Utc};
use miette::{Context, IntoDiagnostic, Result};

/// Format applied to the build timestamp, both for the
/// `org.opencontainers.image.created` label and the resolver output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Retrieves an environment variable.
///
/// # Errors
/// Will error if the variable isn't set.
pub fn get_env_var<S>(key: S) -> Result<String>
where
    S: AsRef<str>,
{
    fn inner(key: &str) -> Result<String> {
        std::env::var(key)
            .into_diagnostic()
            .with_context(|| format!("Failed to retrieve env var '{key}'"))
    }
    inner(key.as_ref())
}

/// Formats an instant the way the pipeline expects timestamps,
/// e.g. `2026-08-30T12:00:00Z`.
#[must_use]
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// The current UTC time in pipeline timestamp format.
#[must_use]
pub fn current_timestamp() -> String {
    format_timestamp(&Utc::now())
}
