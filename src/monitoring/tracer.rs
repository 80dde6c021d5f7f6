/*!
 * Structured Tracing
 * Subscriber setup for the simulator's tracing events
 *
 * Every switch, arrival and completion is emitted as a structured event,
 * so a JSON subscriber yields a machine-readable trace of the run.
 */

use tracing::debug;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Enables JSON output when set to `1` or `true`
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
///
/// Environment variables:
/// - RUST_LOG: log filter (default: warn)
/// - SCHED_TRACE_JSON: JSON output (default: false)
///
/// Output goes to stderr so the console report on stdout stays clean.
/// Calling this again once a subscriber is installed is a no-op.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = json_requested(), "tracing initialized");
    }
}

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
