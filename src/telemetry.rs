//! Opt-in log output for the `tracing` events emitted by the model.
//!
//! Datasets report data replacements and canvas object application at
//! `debug`, cache hits and callback fallbacks at `trace`.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,chartjs_model=info";

/// Installs a compact subscriber with [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact subscriber. `RUST_LOG` takes precedence over
/// `fallback_filter`.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
