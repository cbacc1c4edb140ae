//! Optional log output for hosts without their own `tracing` setup.
//!
//! Constraint violations are emitted at `warn` with their numeric `code`;
//! recompute passes and drags log at `debug`/`trace`. Set `RUST_LOG` (for
//! example `slider_rs=trace`) to see the latter.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, `warn` by default.
///
/// Needs the `telemetry` feature. Returns `false` without it, or when the host
/// already installed a global subscriber.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .is_ok()
}

/// Always `false`: built without the `telemetry` feature.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
