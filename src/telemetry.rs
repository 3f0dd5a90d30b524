//! Telemetry helpers for hosts embedding `site-analytics`.
//!
//! Every ingestion and recomputation path logs through `tracing`. Hosts either
//! call `init_default_tracing` or install their own subscriber.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "warn,site_analytics=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `info` for this crate
/// and `warn` for everything else.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "telemetry")]
    #[test]
    fn default_filter_scopes_info_to_this_crate() {
        let filter =
            tracing_subscriber::EnvFilter::try_new(super::DEFAULT_FILTER).expect("valid filter");
        assert!(filter.to_string().contains("site_analytics=info"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_stays_off_without_the_feature() {
        assert!(!super::init_default_tracing());
    }
}
