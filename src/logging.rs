//! Log filter for the `pagerank` binary
//!
//! `RUST_LOG` directives win when present; otherwise only warnings and errors
//! reach stderr.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when no directives are given
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build a filter from `RUST_LOG`-style directives
///
/// Empty or missing directives fall back to [`DEFAULT_LOG_LEVEL`]. Directives
/// that fail to parse are skipped rather than rejected.
///
/// # Examples
///
/// ```
/// use surfer_rank::logging::log_filter;
/// use tracing_subscriber::filter::LevelFilter;
///
/// assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
/// assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
/// ```
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Build the filter from the `RUST_LOG` environment variable
#[must_use]
pub fn env_log_filter() -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    log_filter(directives.as_deref())
}
