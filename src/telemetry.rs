//! Telemetry helpers for applications embedding `trend-plot`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing`, pick their own fallback directive with
//! `init_tracing_with_fallback`, or install their own subscriber.

/// Fallback filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "info,trend_plot=debug";

/// Initializes a compact `tracing` subscriber with [`DEFAULT_FILTER_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
