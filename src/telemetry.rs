//! Telemetry helpers for applications embedding `chartlet`.
//!
//! The draw path reports its skip decisions (empty charts, non-drawable
//! plot areas, short paths) at `debug` and `trace`, so the default filter
//! keeps this crate at `debug` while holding everything else at `info`.
//! Hosts that need different routing wire their own `tracing` subscriber
//! instead of calling the helper.

/// Filter applied when `RUST_LOG` is unset.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,chartlet=debug";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
